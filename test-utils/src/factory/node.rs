//! Node factory for creating test node entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test nodes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::node::NodeFactory;
///
/// let node = NodeFactory::new(&db, location.id)
///     .fqdn("daemon.example.com")
///     .build()
///     .await?;
/// ```
pub struct NodeFactory<'a> {
    db: &'a DatabaseConnection,
    uuid: Uuid,
    location_id: i32,
    name: String,
    fqdn: String,
    scheme: String,
    daemon_listen: i32,
    daemon_token: String,
}

impl<'a> NodeFactory<'a> {
    /// Creates a new NodeFactory with default values.
    ///
    /// Defaults:
    /// - uuid: random v4
    /// - name: `"Node {id}"` where id is auto-incremented
    /// - fqdn: `"node{id}.example.com"`
    /// - scheme: `"http"`
    /// - daemon_listen: `8080`
    /// - daemon_token: `"token{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `location_id` - Location this node belongs to
    pub fn new(db: &'a DatabaseConnection, location_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            uuid: Uuid::new_v4(),
            location_id,
            name: format!("Node {}", id),
            fqdn: format!("node{}.example.com", id),
            scheme: "http".to_string(),
            daemon_listen: 8080,
            daemon_token: format!("token{}", id),
        }
    }

    /// Sets the node name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the daemon hostname.
    pub fn fqdn(mut self, fqdn: impl Into<String>) -> Self {
        self.fqdn = fqdn.into();
        self
    }

    /// Sets the daemon URL scheme.
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Sets the daemon listen port.
    pub fn daemon_listen(mut self, daemon_listen: i32) -> Self {
        self.daemon_listen = daemon_listen;
        self
    }

    /// Sets the daemon bearer token.
    pub fn daemon_token(mut self, daemon_token: impl Into<String>) -> Self {
        self.daemon_token = daemon_token.into();
        self
    }

    /// Inserts the node into the database.
    pub async fn build(self) -> Result<entity::node::Model, DbErr> {
        entity::node::ActiveModel {
            uuid: ActiveValue::Set(self.uuid),
            location_id: ActiveValue::Set(self.location_id),
            name: ActiveValue::Set(self.name),
            fqdn: ActiveValue::Set(self.fqdn),
            scheme: ActiveValue::Set(self.scheme),
            daemon_listen: ActiveValue::Set(self.daemon_listen),
            daemon_token: ActiveValue::Set(self.daemon_token),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a node in the given location with default values.
pub async fn create_node(
    db: &DatabaseConnection,
    location_id: i32,
) -> Result<entity::node::Model, DbErr> {
    NodeFactory::new(db, location_id).build().await
}
