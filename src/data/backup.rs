use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

pub struct BackupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BackupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a backup by ID.
    ///
    /// Soft-deleted rows are included so a deleted backup stays queryable
    /// for audit.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::backup::Model>, DbErr> {
        entity::prelude::Backup::find_by_id(id).one(self.db).await
    }

    /// Gets a live backup by its UUID.
    ///
    /// Excludes soft-deleted rows; use [`BackupRepository::find_by_id`] for
    /// audit lookups.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The live backup
    /// - `Ok(None)`: No live backup with this UUID
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<entity::backup::Model>, DbErr> {
        entity::prelude::Backup::find()
            .filter(entity::backup::Column::Uuid.eq(uuid))
            .filter(entity::backup::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Soft-deletes a backup by stamping `deleted_at` with the current time.
    ///
    /// The row is never physically removed.
    ///
    /// # Returns
    /// - `Ok(Model)`: The backup with `deleted_at` set
    /// - `Err(DbErr)`: Database error
    pub async fn soft_delete(
        &self,
        backup: entity::backup::Model,
    ) -> Result<entity::backup::Model, DbErr> {
        let mut backup: entity::backup::ActiveModel = backup.into();
        backup.deleted_at = ActiveValue::Set(Some(Utc::now()));

        backup.update(self.db).await
    }
}
