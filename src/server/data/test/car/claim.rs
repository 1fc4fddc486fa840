use super::*;
use sea_orm::TransactionTrait;

/// Tests claiming an existing car inside a transaction leaves the row unchanged.
///
/// Expected: Ok(true) and identical row after commit
#[tokio::test]
async fn claims_existing_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let car = factory::create_car(db, location.id).await?;

    let txn = db.begin().await?;
    let claimed = CarRepository::new(&txn).claim(car.id).await?;
    txn.commit().await?;

    assert!(claimed);
    let (after, _) = CarRepository::new(db).find_by_id(car.id).await?.unwrap();
    assert_eq!(after, car);

    Ok(())
}

/// Expected: Ok(false) for a car that does not exist
#[tokio::test]
async fn returns_false_for_missing_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let claimed = CarRepository::new(db).claim(4242).await?;

    assert!(!claimed);

    Ok(())
}
