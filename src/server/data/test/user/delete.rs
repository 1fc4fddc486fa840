use super::*;

/// Tests deleting a user removes their rentals and login history.
///
/// Expected: Ok(true) with dependent rows gone
#[tokio::test]
async fn cascades_to_rentals_and_logins() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _location, car) = factory::helpers::create_car_with_dependencies(db).await?;
    let rental = factory::create_rental(db, user.id, car.id).await?;
    let login = factory::create_login(db, user.id, factory::helpers::day(0)).await?;

    let deleted = UserRepository::new(db).delete(user.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Rental::find_by_id(rental.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::LoginHistory::find_by_id(login.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Car::find_by_id(car.id).one(db).await?.is_some());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = UserRepository::new(db).delete(4242).await?;

    assert!(!deleted);

    Ok(())
}
