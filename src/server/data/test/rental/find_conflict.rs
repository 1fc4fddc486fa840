use super::*;

/// Tests a request overlapping an active rental on the same car.
///
/// Existing rental covers days 0..5, request covers days 3..8.
///
/// Expected: Ok(Some) with the existing rental
#[tokio::test]
async fn finds_overlapping_active_rental() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _location, car) = factory::helpers::create_car_with_dependencies(db).await?;
    let existing = RentalFactory::new(db, user.id, car.id).days(0, 5).build().await?;

    let conflict = RentalRepository::new(db)
        .find_conflict(car.id, day(3), day(8), None)
        .await?;

    assert_eq!(conflict.map(|r| r.id), Some(existing.id));

    Ok(())
}

/// Tests a request contained entirely inside an existing rental.
///
/// Expected: Ok(Some)
#[tokio::test]
async fn finds_containing_rental() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _location, car) = factory::helpers::create_car_with_dependencies(db).await?;
    RentalFactory::new(db, user.id, car.id).days(0, 10).build().await?;

    let conflict = RentalRepository::new(db)
        .find_conflict(car.id, day(2), day(4), None)
        .await?;

    assert!(conflict.is_some());

    Ok(())
}

/// Tests back-to-back rentals that share only an endpoint.
///
/// Expected: Ok(None) on both sides of the existing rental
#[tokio::test]
async fn ignores_touching_rentals() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _location, car) = factory::helpers::create_car_with_dependencies(db).await?;
    RentalFactory::new(db, user.id, car.id).days(5, 10).build().await?;

    let repo = RentalRepository::new(db);

    assert!(repo.find_conflict(car.id, day(0), day(5), None).await?.is_none());
    assert!(repo.find_conflict(car.id, day(10), day(12), None).await?.is_none());

    Ok(())
}

/// Tests completed and cancelled rentals never block a booking.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_inactive_rentals() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _location, car) = factory::helpers::create_car_with_dependencies(db).await?;
    RentalFactory::new(db, user.id, car.id)
        .days(0, 5)
        .status("cancelled")
        .build()
        .await?;
    RentalFactory::new(db, user.id, car.id)
        .days(0, 5)
        .status("completed")
        .build()
        .await?;

    let conflict = RentalRepository::new(db)
        .find_conflict(car.id, day(1), day(3), None)
        .await?;

    assert!(conflict.is_none());

    Ok(())
}

/// Tests rentals of other cars are not considered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_cars() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, location, car) = factory::helpers::create_car_with_dependencies(db).await?;
    let other_car = factory::create_car(db, location.id).await?;
    RentalFactory::new(db, user.id, other_car.id)
        .days(0, 5)
        .build()
        .await?;

    let conflict = RentalRepository::new(db)
        .find_conflict(car.id, day(0), day(5), None)
        .await?;

    assert!(conflict.is_none());

    Ok(())
}

/// Tests a rental being edited does not conflict with itself.
///
/// Expected: Ok(None) when excluded, Ok(Some) otherwise
#[tokio::test]
async fn excludes_given_rental() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _location, car) = factory::helpers::create_car_with_dependencies(db).await?;
    let rental = RentalFactory::new(db, user.id, car.id).days(0, 5).build().await?;

    let repo = RentalRepository::new(db);

    assert!(repo
        .find_conflict(car.id, day(1), day(6), Some(rental.id))
        .await?
        .is_none());
    assert!(repo
        .find_conflict(car.id, day(1), day(6), None)
        .await?
        .is_some());

    Ok(())
}
