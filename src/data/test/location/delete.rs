use super::*;

/// Tests deleting an existing location.
///
/// Expected: one row removed, lookup returns None afterwards
#[tokio::test]
async fn deletes_location_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    let repo = LocationRepository::new(db);
    let removed = repo.delete(location.id).await?;

    assert_eq!(removed, 1);
    assert!(repo.find_by_id(location.id).await?.is_none());

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Expected: zero rows removed
#[tokio::test]
async fn deleting_unknown_id_removes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LocationRepository::new(db);
    let removed = repo.delete(9999).await?;

    assert_eq!(removed, 0);

    Ok(())
}
