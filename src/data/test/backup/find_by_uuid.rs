use super::*;
use chrono::Utc;

/// Tests looking up a live backup by UUID.
///
/// Expected: Ok(Some) for a live backup
#[tokio::test]
async fn finds_live_backup_by_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, server) = factory::helpers::create_server_with_dependencies(db).await?;
    let backup = factory::create_backup(db, server.id).await?;

    let repo = BackupRepository::new(db);
    let found = repo.find_by_uuid(backup.uuid).await?;

    assert_eq!(found.map(|b| b.id), Some(backup.id));

    Ok(())
}

/// Tests that soft-deleted backups are excluded from live lookups while
/// remaining queryable by id.
///
/// Expected: find_by_uuid returns None, find_by_id still returns the row
#[tokio::test]
async fn excludes_soft_deleted_backups_from_live_lookups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, server) = factory::helpers::create_server_with_dependencies(db).await?;
    let backup = factory::backup::BackupFactory::new(db, server.id)
        .deleted_at(Some(Utc::now()))
        .build()
        .await?;

    let repo = BackupRepository::new(db);

    assert!(repo.find_by_uuid(backup.uuid).await?.is_none());
    assert!(repo.find_by_id(backup.id).await?.is_some());

    Ok(())
}
