use super::*;

/// Tests looking up a location by its short code.
///
/// Expected: Ok(Some) for a matching code
#[tokio::test]
async fn finds_location_by_short_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::location::LocationFactory::new(db)
        .short("eu-west")
        .build()
        .await?;

    let repo = LocationRepository::new(db);
    let found = repo.find_by_short("eu-west").await?;

    assert_eq!(found.map(|l| l.id), Some(location.id));

    Ok(())
}

/// Tests looking up a short code that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_short_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_location(db).await?;

    let repo = LocationRepository::new(db);
    let found = repo.find_by_short("does-not-exist").await?;

    assert!(found.is_none());

    Ok(())
}
