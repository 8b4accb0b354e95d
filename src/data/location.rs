use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct LocationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all locations ordered by short code.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: All locations
    /// - `Err(DbErr)`: Database error
    pub async fn all(&self) -> Result<Vec<entity::location::Model>, DbErr> {
        entity::prelude::Location::find()
            .order_by_asc(entity::location::Column::Short)
            .all(self.db)
            .await
    }

    /// Gets a location by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::location::Model>, DbErr> {
        entity::prelude::Location::find_by_id(id).one(self.db).await
    }

    /// Gets a location by its short identifying code.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The matching location
    /// - `Ok(None)`: No location uses this short code
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_short(
        &self,
        short: &str,
    ) -> Result<Option<entity::location::Model>, DbErr> {
        entity::prelude::Location::find()
            .filter(entity::location::Column::Short.eq(short))
            .one(self.db)
            .await
    }

    /// Deletes a location row.
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of rows removed (0 if the id did not exist)
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Location::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
