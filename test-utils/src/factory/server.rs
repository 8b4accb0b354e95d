//! Server factory for creating test server entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::server::ServerStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test servers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::server::ServerFactory;
///
/// let server = ServerFactory::new(&db, user.id, node.id)
///     .suspended(true)
///     .build()
///     .await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    uuid: Uuid,
    name: String,
    owner_id: i32,
    node_id: i32,
    suspended: bool,
    status: Option<ServerStatus>,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - uuid: random v4
    /// - name: `"Server {id}"` where id is auto-incremented
    /// - suspended: `false`
    /// - status: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - User that owns the server
    /// - `node_id` - Node the server runs on
    pub fn new(db: &'a DatabaseConnection, owner_id: i32, node_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            uuid: Uuid::new_v4(),
            name: format!("Server {}", id),
            owner_id,
            node_id,
            suspended: false,
            status: None,
        }
    }

    /// Sets the server name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the suspended flag.
    pub fn suspended(mut self, suspended: bool) -> Self {
        self.suspended = suspended;
        self
    }

    /// Sets the install/restore lifecycle status.
    pub fn status(mut self, status: Option<ServerStatus>) -> Self {
        self.status = status;
        self
    }

    /// Inserts the server into the database.
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            uuid: ActiveValue::Set(self.uuid),
            name: ActiveValue::Set(self.name),
            owner_id: ActiveValue::Set(self.owner_id),
            node_id: ActiveValue::Set(self.node_id),
            suspended: ActiveValue::Set(self.suspended),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server with default values.
pub async fn create_server(
    db: &DatabaseConnection,
    owner_id: i32,
    node_id: i32,
) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db, owner_id, node_id).build().await
}
