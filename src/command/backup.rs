//! Backup lifecycle commands.

use std::io::IsTerminal;

use clap::Subcommand;
use dialoguer::Confirm;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    daemon::DaemonClient, data::backup::BackupRepository, error::AppError,
    service::backup::DeleteBackupService, storage::ArchiveStore,
};

#[derive(Subcommand)]
pub enum BackupCommands {
    /// Delete a backup and its stored archive
    Delete {
        /// UUID of the backup to delete
        uuid: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn run(
    db: &DatabaseConnection,
    daemon: &dyn DaemonClient,
    archives: &dyn ArchiveStore,
    command: BackupCommands,
) -> Result<(), AppError> {
    match command {
        BackupCommands::Delete { uuid, yes } => {
            delete(
                db,
                daemon,
                archives,
                &uuid,
                yes,
                std::io::stdin().is_terminal(),
            )
            .await
        }
    }
}

async fn delete(
    db: &DatabaseConnection,
    daemon: &dyn DaemonClient,
    archives: &dyn ArchiveStore,
    raw: &str,
    yes: bool,
    interactive: bool,
) -> Result<(), AppError> {
    let uuid = Uuid::parse_str(raw).map_err(|_| {
        AppError::InvalidArgument(format!(r#""{}" is not a valid backup UUID."#, raw))
    })?;

    let backup = BackupRepository::new(db)
        .find_by_uuid(uuid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No backup with the UUID {} was found.", uuid)))?;

    if !yes && interactive {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete backup {}?", backup.name))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Backup {} was not deleted.", backup.name);
            return Ok(());
        }
    }

    DeleteBackupService::new(db, daemon, archives)
        .handle(&backup)
        .await?;

    println!("Backup {} has been deleted.", backup.name);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daemon::test::RecordingDaemon;
    use crate::storage::test::RecordingArchiveStore;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn deletes_backup_by_uuid() {
        let test = TestBuilder::new()
            .with_panel_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, _, _, server) = factory::helpers::create_server_with_dependencies(db)
            .await
            .unwrap();
        let backup = factory::create_backup(db, server.id).await.unwrap();

        let daemon = RecordingDaemon::new();
        let archives = RecordingArchiveStore::new("backups");

        delete(db, &daemon, &archives, &backup.uuid.to_string(), true, false)
            .await
            .unwrap();

        let stored = BackupRepository::new(db)
            .find_by_id(backup.id)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.deleted_at.is_some());
        assert_eq!(daemon.sent_count(), 1);
    }

    #[tokio::test]
    async fn unknown_uuid_is_reported_as_not_found() {
        let test = TestBuilder::new()
            .with_panel_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let daemon = RecordingDaemon::new();
        let archives = RecordingArchiveStore::new("backups");

        let result = delete(
            db,
            &daemon,
            &archives,
            &Uuid::new_v4().to_string(),
            true,
            false,
        )
        .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(daemon.sent_count(), 0);
    }
}
