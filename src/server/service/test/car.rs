use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::car::{CarQuery, CarStatus},
    server::{
        error::AppError,
        model::car::{CarFilter, CreateCarParams, UpdateCarParams},
        service::car::CarService,
    },
};

fn camry(location_id: i32) -> CreateCarParams {
    CreateCarParams {
        make: "Toyota".to_string(),
        model: "Camry".to_string(),
        year: 2022,
        location_id,
        status: CarStatus::Available,
        car_id: "CAR-001".to_string(),
    }
}

/// Expected: Ok with the location details attached
#[tokio::test]
async fn creates_car_with_location() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    let car = CarService::new(db).create(camry(location.id)).await?;

    assert_eq!(car.display_name(), "Toyota Camry");
    assert_eq!(car.location.map(|l| l.name), Some(location.name));

    Ok(())
}

/// Tests validation of year, required text and location.
///
/// Expected: Err(BadRequest) for each invalid input
#[tokio::test]
async fn rejects_invalid_car() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let service = CarService::new(db);

    let mut zero_year = camry(location.id);
    zero_year.year = 0;
    let mut blank_make = camry(location.id);
    blank_make.make = String::new();
    let unknown_location = camry(4242);

    for params in [zero_year, blank_make, unknown_location] {
        let result = service.create(params).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

/// Expected: Err(Conflict) for a car ID already in the fleet
#[tokio::test]
async fn rejects_duplicate_car_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let service = CarService::new(db);
    service.create(camry(location.id)).await?;

    let mut duplicate = camry(location.id);
    duplicate.make = "Honda".to_string();
    let result = service.create(duplicate).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Expected: Ok with only the status changed
#[tokio::test]
async fn updates_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let service = CarService::new(db);
    let car = service.create(camry(location.id)).await?;

    let updated = service
        .update(UpdateCarParams {
            id: car.id,
            status: Some(CarStatus::Maintenance),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.status, CarStatus::Maintenance);
    assert_eq!(updated.car_id, "CAR-001");

    Ok(())
}

/// Tests page metadata for a filtered list.
///
/// Expected: Ok with five matches split over three pages
#[tokio::test]
async fn reports_page_metadata() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    for _ in 0..5 {
        factory::create_car(db, location.id).await?;
    }

    let filter = CarFilter::from_query(CarQuery {
        search: Some("  ".to_string()),
        status: None,
        ordering: None,
        page: 0,
        per_page: Some(2),
    });
    let page = CarService::new(db).get_filtered(filter).await?;

    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.cars.len(), 2);

    Ok(())
}

/// Expected: Err(BadRequest) when the requested page offset overflows
#[tokio::test]
async fn rejects_out_of_range_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CarService::new(db)
        .get_filtered(CarFilter::from_query(CarQuery {
            page: u64::MAX,
            per_page: Some(25),
            ..Default::default()
        }))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
