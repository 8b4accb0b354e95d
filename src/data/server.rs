use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a server by ID.
    ///
    /// Reconcilers call this immediately before deciding a transition so the
    /// decision is made against the stored row, not a stale in-memory copy.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::server::Model>, DbErr> {
        entity::prelude::Server::find_by_id(id).one(self.db).await
    }

    /// Gets a server by its UUID.
    pub async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<entity::server::Model>, DbErr> {
        entity::prelude::Server::find()
            .filter(entity::server::Column::Uuid.eq(uuid))
            .one(self.db)
            .await
    }

    /// Counts servers assigned to a node.
    ///
    /// Used as the dependent-resource guard before a node is deleted.
    pub async fn count_for_node(&self, node_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Server::find()
            .filter(entity::server::Column::NodeId.eq(node_id))
            .count(self.db)
            .await
    }

    /// Persists a new value of the suspended flag.
    ///
    /// Only the flag is written; the install/restore `status` column is
    /// untouched.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated server
    /// - `Err(DbErr)`: Database error
    pub async fn set_suspended(
        &self,
        server: entity::server::Model,
        suspended: bool,
    ) -> Result<entity::server::Model, DbErr> {
        let mut server: entity::server::ActiveModel = server.into();
        server.suspended = ActiveValue::Set(suspended);

        server.update(self.db).await
    }
}
