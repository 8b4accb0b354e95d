use entity::backup::BackupDisk;
use sea_orm::DatabaseConnection;

use crate::{
    daemon::{DaemonClient, DaemonCommand},
    data::{backup::BackupRepository, node::NodeRepository, server::ServerRepository},
    error::AppError,
    storage::{archive_key, ArchiveStore},
};

/// Deletes a backup record after removing its stored archive.
pub struct DeleteBackupService<'a> {
    db: &'a DatabaseConnection,
    daemon: &'a dyn DaemonClient,
    archives: &'a dyn ArchiveStore,
}

impl<'a> DeleteBackupService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        daemon: &'a dyn DaemonClient,
        archives: &'a dyn ArchiveStore,
    ) -> Self {
        Self {
            db,
            daemon,
            archives,
        }
    }

    /// Removes the stored archive for `backup`, then soft-deletes the record.
    ///
    /// A locked backup that completed successfully is refused before any
    /// remote call; a locked backup that failed carries nothing worth
    /// retaining and is deletable. The daemon reporting the archive as
    /// already absent counts as success. Every other remote failure
    /// propagates unchanged and leaves the record live, so the operation can
    /// be retried.
    ///
    /// # Arguments
    /// - `backup` - The backup to delete
    ///
    /// # Returns
    /// - `Ok(())` - Archive removed (or already absent) and record soft-deleted
    /// - `Err(AppError::BackupLocked)` - Backup is locked and successful
    /// - `Err(AppError)` - Remote or database failure; record untouched
    pub async fn handle(&self, backup: &entity::backup::Model) -> Result<(), AppError> {
        if backup.is_locked && backup.is_successful {
            return Err(AppError::BackupLocked);
        }

        let repo = BackupRepository::new(self.db);

        // Decide against the stored row, not the caller's copy.
        let backup = repo
            .find_by_id(backup.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Backup not found.".to_string()))?;

        // A concurrent deletion already won; the end state we want holds.
        if backup.deleted_at.is_some() {
            return Ok(());
        }

        let server = ServerRepository::new(self.db)
            .find_by_id(backup.server_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Server not found.".to_string()))?;

        match backup.disk {
            BackupDisk::Wings => {
                let node = NodeRepository::new(self.db)
                    .find_by_id(server.node_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Node not found.".to_string()))?;

                let command = DaemonCommand::DeleteBackup {
                    server_uuid: server.uuid,
                    backup_uuid: backup.uuid,
                };

                match self.daemon.send_command(&node, command).await {
                    Ok(()) => {}
                    Err(err) if err.is_not_found() => {
                        tracing::warn!(
                            backup = %backup.uuid,
                            "daemon no longer holds this backup, deleting the record anyway"
                        );
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            BackupDisk::S3 => {
                let key = archive_key(server.uuid, backup.uuid);
                tracing::debug!(
                    bucket = self.archives.bucket(),
                    %key,
                    "removing backup archive from object storage"
                );
                self.archives.delete_object(&key).await?;
            }
        }

        repo.soft_delete(backup).await?;

        Ok(())
    }
}
