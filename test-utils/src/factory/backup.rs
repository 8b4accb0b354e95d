//! Backup factory for creating test backup entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::backup::BackupDisk;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test backups with customizable fields.
///
/// Defaults describe a completed, unlocked backup held by the daemon; use
/// the setters to build locked, failed, object-storage, or soft-deleted
/// variants.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::backup::BackupFactory;
///
/// let backup = BackupFactory::new(&db, server.id)
///     .is_locked(true)
///     .is_successful(false)
///     .build()
///     .await?;
/// ```
pub struct BackupFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: i32,
    uuid: Uuid,
    name: String,
    disk: BackupDisk,
    is_successful: bool,
    is_locked: bool,
    bytes: i64,
    deleted_at: Option<chrono::DateTime<Utc>>,
}

impl<'a> BackupFactory<'a> {
    /// Creates a new BackupFactory with default values.
    ///
    /// Defaults:
    /// - uuid: random v4
    /// - name: `"Backup {id}"` where id is auto-incremented
    /// - disk: `BackupDisk::Wings`
    /// - is_successful: `true`
    /// - is_locked: `false`
    /// - bytes: `1024`
    /// - deleted_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `server_id` - Server the backup belongs to
    pub fn new(db: &'a DatabaseConnection, server_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            server_id,
            uuid: Uuid::new_v4(),
            name: format!("Backup {}", id),
            disk: BackupDisk::Wings,
            is_successful: true,
            is_locked: false,
            bytes: 1024,
            deleted_at: None,
        }
    }

    /// Sets the storage adapter tag.
    pub fn disk(mut self, disk: BackupDisk) -> Self {
        self.disk = disk;
        self
    }

    /// Sets the successful flag.
    pub fn is_successful(mut self, is_successful: bool) -> Self {
        self.is_successful = is_successful;
        self
    }

    /// Sets the locked flag.
    pub fn is_locked(mut self, is_locked: bool) -> Self {
        self.is_locked = is_locked;
        self
    }

    /// Sets the soft-delete timestamp.
    pub fn deleted_at(mut self, deleted_at: Option<chrono::DateTime<Utc>>) -> Self {
        self.deleted_at = deleted_at;
        self
    }

    /// Inserts the backup into the database.
    pub async fn build(self) -> Result<entity::backup::Model, DbErr> {
        let completed_at = self.is_successful.then(Utc::now);

        entity::backup::ActiveModel {
            server_id: ActiveValue::Set(self.server_id),
            uuid: ActiveValue::Set(self.uuid),
            name: ActiveValue::Set(self.name),
            disk: ActiveValue::Set(self.disk),
            is_successful: ActiveValue::Set(self.is_successful),
            is_locked: ActiveValue::Set(self.is_locked),
            bytes: ActiveValue::Set(self.bytes),
            completed_at: ActiveValue::Set(completed_at),
            deleted_at: ActiveValue::Set(self.deleted_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a completed, unlocked daemon-held backup for the given server.
pub async fn create_backup(
    db: &DatabaseConnection,
    server_id: i32,
) -> Result<entity::backup::Model, DbErr> {
    BackupFactory::new(db, server_id).build().await
}
