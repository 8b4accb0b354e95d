use super::*;

/// Tests that only servers on the given node are counted.
///
/// Expected: counts reflect each node's own servers
#[tokio::test]
async fn counts_only_servers_on_the_node() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, location, node, _server) =
        factory::helpers::create_server_with_dependencies(db).await?;
    let empty_node = factory::create_node(db, location.id).await?;
    factory::create_server(db, user.id, node.id).await?;

    let repo = ServerRepository::new(db);

    assert_eq!(repo.count_for_node(node.id).await?, 2);
    assert_eq!(repo.count_for_node(empty_node.id).await?, 0);

    Ok(())
}
