use super::*;

/// Expected: Ok with the status stored as its lowercase name
#[tokio::test]
async fn creates_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    let car = CarRepository::new(db)
        .create(&CreateCarParams {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2022,
            location_id: location.id,
            status: CarStatus::Maintenance,
            car_id: "CAR-001".to_string(),
        })
        .await?;

    assert_eq!(car.make, "Toyota");
    assert_eq!(car.status, "maintenance");
    assert_eq!(car.location_id, location.id);

    Ok(())
}

/// Tests the fleet identifier is unique.
///
/// Expected: Err on the second insert with the same car ID
#[tokio::test]
async fn rejects_duplicate_car_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    factory::car::CarFactory::new(db, location.id)
        .car_id("CAR-001")
        .build()
        .await?;

    let result = CarRepository::new(db)
        .create(&CreateCarParams {
            make: "Honda".to_string(),
            model: "Civic".to_string(),
            year: 2021,
            location_id: location.id,
            status: CarStatus::Available,
            car_id: "CAR-001".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
