use super::*;

/// Tests search matches make, model and car ID without regard to case.
///
/// Expected: Ok with only the matching cars
#[tokio::test]
async fn searches_make_model_and_car_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    factory::car::CarFactory::new(db, location.id)
        .make("Toyota")
        .model("Camry")
        .car_id("CAR-001")
        .build()
        .await?;
    factory::car::CarFactory::new(db, location.id)
        .make("Honda")
        .model("Civic")
        .car_id("CAR-002")
        .build()
        .await?;
    factory::car::CarFactory::new(db, location.id)
        .make("Ford")
        .model("Mustang")
        .car_id("FLEET-TOY")
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let (cars, total) = repo.get_filtered(&filter(Some("toy"), None)).await?;

    assert_eq!(total, 2);
    let makes: Vec<&str> = cars.iter().map(|(car, _)| car.make.as_str()).collect();
    assert_eq!(makes, vec!["Ford", "Toyota"]);

    let (cars, _) = repo.get_filtered(&filter(Some("civic"), None)).await?;
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].0.car_id, "CAR-002");

    Ok(())
}

/// Expected: Ok with only cars of the requested status, joined with their location
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    factory::car::CarFactory::new(db, location.id)
        .status("rented")
        .build()
        .await?;
    let available = factory::create_car(db, location.id).await?;

    let (cars, total) = CarRepository::new(db)
        .get_filtered(&filter(None, Some(CarStatus::Available)))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(cars[0].0.id, available.id);
    assert_eq!(cars[0].1.as_ref().map(|l| l.id), Some(location.id));

    Ok(())
}

/// Expected: Ok with total counting every match and the page holding `per_page` cars
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    for _ in 0..5 {
        factory::create_car(db, location.id).await?;
    }

    let mut page = filter(None, None);
    page.per_page = 2;
    page.page = 2;

    let (cars, total) = CarRepository::new(db).get_filtered(&page).await?;

    assert_eq!(total, 5);
    assert_eq!(cars.len(), 1);

    Ok(())
}

/// Tests search also matches the model year and the status.
///
/// Expected: Ok with the car of that year, then the car in maintenance
#[tokio::test]
async fn searches_year_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let old = factory::car::CarFactory::new(db, location.id)
        .make("Saab")
        .model("900")
        .year(2015)
        .car_id("OLD-1")
        .build()
        .await?;
    let serviced = factory::car::CarFactory::new(db, location.id)
        .make("Volvo")
        .model("XC60")
        .year(2022)
        .car_id("NEW-1")
        .status("maintenance")
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let (by_year, _) = repo.get_filtered(&filter(Some("2015"), None)).await?;
    let (by_status, _) = repo.get_filtered(&filter(Some("mainten"), None)).await?;

    assert_eq!(
        by_year.iter().map(|(car, _)| car.id).collect::<Vec<_>>(),
        vec![old.id]
    );
    assert_eq!(
        by_status.iter().map(|(car, _)| car.id).collect::<Vec<_>>(),
        vec![serviced.id]
    );

    Ok(())
}

/// Tests requested ordering terms are applied in order.
///
/// Expected: Ok with cars by year descending, make ascending within a year
#[tokio::test]
async fn applies_requested_ordering() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let ford = factory::car::CarFactory::new(db, location.id)
        .make("Ford")
        .year(2020)
        .build()
        .await?;
    let audi = factory::car::CarFactory::new(db, location.id)
        .make("Audi")
        .year(2020)
        .build()
        .await?;
    let tesla = factory::car::CarFactory::new(db, location.id)
        .make("Tesla")
        .year(2023)
        .build()
        .await?;

    let mut sorted = filter(None, None);
    sorted.ordering = vec![
        SortKey {
            field: CarSortField::Year,
            descending: true,
        },
        SortKey {
            field: CarSortField::Make,
            descending: false,
        },
    ];

    let (cars, _) = CarRepository::new(db).get_filtered(&sorted).await?;

    assert_eq!(
        cars.iter().map(|(car, _)| car.id).collect::<Vec<_>>(),
        vec![tesla.id, audi.id, ford.id]
    );

    Ok(())
}
