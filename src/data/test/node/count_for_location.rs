use super::*;

/// Tests that only nodes in the given location are counted.
///
/// Expected: counts reflect each location's own nodes
#[tokio::test]
async fn counts_only_nodes_in_the_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let populated = factory::create_location(db).await?;
    let empty = factory::create_location(db).await?;

    factory::create_node(db, populated.id).await?;
    factory::create_node(db, populated.id).await?;

    let repo = NodeRepository::new(db);

    assert_eq!(repo.count_for_location(populated.id).await?, 2);
    assert_eq!(repo.count_for_location(empty.id).await?, 0);

    Ok(())
}
