use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

pub struct NodeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NodeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a node by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::node::Model>, DbErr> {
        entity::prelude::Node::find_by_id(id).one(self.db).await
    }

    /// Gets a node by its name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::node::Model>, DbErr> {
        entity::prelude::Node::find()
            .filter(entity::node::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Counts nodes assigned to a location.
    ///
    /// Used as the dependent-resource guard before a location is deleted.
    pub async fn count_for_location(&self, location_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Node::find()
            .filter(entity::node::Column::LocationId.eq(location_id))
            .count(self.db)
            .await
    }

    /// Deletes a node row.
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of rows removed (0 if the id did not exist)
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Node::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
