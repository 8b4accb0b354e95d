//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a complete server record graph with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as server owner)
/// 2. Location
/// 3. Node (in the location)
/// 4. Server (on the node, owned by the user)
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, location, node, server))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_server_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::location::Model,
        entity::node::Model,
        entity::server::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let location = crate::factory::location::create_location(db).await?;
    let node = crate::factory::node::create_node(db, location.id).await?;
    let server = crate::factory::server::create_server(db, user.id, node.id).await?;

    Ok((user, location, node, server))
}
