use super::*;
use entity::server::ServerStatus;

/// Tests persisting the suspended flag.
///
/// Expected: flag updated in the stored row
#[tokio::test]
async fn persists_the_suspended_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, server) = factory::helpers::create_server_with_dependencies(db).await?;
    assert!(!server.suspended);

    let repo = ServerRepository::new(db);
    let updated = repo.set_suspended(server, true).await?;

    assert!(updated.suspended);
    let stored = repo.find_by_id(updated.id).await?.unwrap();
    assert!(stored.suspended);

    Ok(())
}

/// Tests that suspending leaves the install/restore status untouched.
///
/// Expected: `status` survives a suspended-flag update
#[tokio::test]
async fn leaves_the_lifecycle_status_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, node, _) = factory::helpers::create_server_with_dependencies(db).await?;
    let server = factory::server::ServerFactory::new(db, user.id, node.id)
        .status(Some(ServerStatus::Installing))
        .build()
        .await?;

    let repo = ServerRepository::new(db);
    let updated = repo.set_suspended(server, true).await?;

    assert!(updated.suspended);
    assert_eq!(updated.status, Some(ServerStatus::Installing));

    Ok(())
}
