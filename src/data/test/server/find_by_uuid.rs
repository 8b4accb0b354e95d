use super::*;
use uuid::Uuid;

/// Tests looking up a server by UUID.
///
/// Expected: Ok(Some) for the created server, Ok(None) for a random UUID
#[tokio::test]
async fn finds_server_by_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, server) = factory::helpers::create_server_with_dependencies(db).await?;

    let repo = ServerRepository::new(db);

    let found = repo.find_by_uuid(server.uuid).await?;
    assert_eq!(found.map(|s| s.id), Some(server.id));

    let missing = repo.find_by_uuid(Uuid::new_v4()).await?;
    assert!(missing.is_none());

    Ok(())
}
