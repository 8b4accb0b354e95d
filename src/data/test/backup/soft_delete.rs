use super::*;

/// Tests stamping the soft-delete timestamp.
///
/// Expected: deleted_at set, row still present by id
#[tokio::test]
async fn stamps_deleted_at_and_keeps_the_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, server) = factory::helpers::create_server_with_dependencies(db).await?;
    let backup = factory::create_backup(db, server.id).await?;
    assert!(backup.deleted_at.is_none());

    let repo = BackupRepository::new(db);
    let deleted = repo.soft_delete(backup).await?;

    assert!(deleted.deleted_at.is_some());

    let stored = repo.find_by_id(deleted.id).await?.unwrap();
    assert!(stored.deleted_at.is_some());

    Ok(())
}
