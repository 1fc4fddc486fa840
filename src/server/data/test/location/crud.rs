use super::*;

/// Tests locations come back ordered by name.
///
/// Expected: Ok with "Airport" before "Downtown"
#[tokio::test]
async fn get_all_orders_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LocationRepository::new(db);
    repo.create(&CreateLocationParams {
        name: "Downtown".to_string(),
        address: "123 Main St".to_string(),
    })
    .await?;
    repo.create(&CreateLocationParams {
        name: "Airport".to_string(),
        address: "456 Airport Rd".to_string(),
    })
    .await?;

    let locations = repo.get_all().await?;

    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0].name, "Airport");
    assert_eq!(locations[1].name, "Downtown");

    Ok(())
}

/// Expected: Ok with name changed and address kept
#[tokio::test]
async fn update_keeps_missing_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    let updated = LocationRepository::new(db)
        .update(&UpdateLocationParams {
            id: location.id,
            name: Some("Harbour".to_string()),
            address: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Harbour");
    assert_eq!(updated.address, location.address);

    Ok(())
}

/// Tests deleting a location removes the cars kept there.
///
/// Expected: Ok(true) with the car gone
#[tokio::test]
async fn delete_cascades_to_cars() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let car = factory::create_car(db, location.id).await?;

    let deleted = LocationRepository::new(db).delete(location.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Car::find_by_id(car.id).one(db).await?.is_none());

    Ok(())
}
