use super::*;

/// Tests that all locations are returned ordered by short code.
///
/// Expected: Ok with locations sorted by `short`
#[tokio::test]
async fn returns_locations_ordered_by_short() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_panel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::location::LocationFactory::new(db)
        .short("zz-east")
        .build()
        .await?;
    factory::location::LocationFactory::new(db)
        .short("aa-west")
        .build()
        .await?;

    let repo = LocationRepository::new(db);
    let locations = repo.all().await?;

    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0].short, "aa-west");
    assert_eq!(locations[1].short, "zz-east");

    Ok(())
}
