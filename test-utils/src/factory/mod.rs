//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let location = factory::location::create_location(&db).await?;
//!
//!     // Create a server with its full dependency chain
//!     let (user, location, node, server) =
//!         factory::helpers::create_server_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let backup = factory::backup::BackupFactory::new(&db, server.id)
//!     .is_locked(true)
//!     .is_successful(false)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `location` - Create location entities
//! - `node` - Create node entities
//! - `server` - Create server entities
//! - `backup` - Create backup entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod backup;
pub mod helpers;
pub mod location;
pub mod node;
pub mod server;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use backup::create_backup;
pub use location::create_location;
pub use node::create_node;
pub use server::create_server;
pub use user::create_user;
