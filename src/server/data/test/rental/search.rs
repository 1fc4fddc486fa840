use super::*;

fn search(text: &str) -> RentalFilter {
    RentalFilter {
        search: Some(text.to_string()),
        ..Default::default()
    }
}

/// Tests search matches the renter's username, the car ID and the status.
///
/// Expected: Ok with only the rentals matching each search text
#[tokio::test]
async fn matches_username_car_id_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let alice = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;
    let bob = factory::user::UserFactory::new(db)
        .username("bob")
        .build()
        .await?;
    let camry = factory::car::CarFactory::new(db, location.id)
        .car_id("CAR-001")
        .build()
        .await?;
    let civic = factory::car::CarFactory::new(db, location.id)
        .car_id("CAR-002")
        .build()
        .await?;

    let alices = RentalFactory::new(db, alice.id, camry.id).days(0, 2).build().await?;
    let bobs = RentalFactory::new(db, bob.id, civic.id)
        .days(3, 5)
        .status("cancelled")
        .build()
        .await?;

    let repo = RentalRepository::new(db);
    let ids = |rentals: Vec<entity::rental::Model>| {
        rentals.into_iter().map(|r| r.id).collect::<Vec<_>>()
    };

    assert_eq!(
        ids(repo.get_all(RentalScope::All, &search("ALI")).await?),
        vec![alices.id]
    );
    assert_eq!(
        ids(repo.get_all(RentalScope::All, &search("car-002")).await?),
        vec![bobs.id]
    );
    assert_eq!(
        ids(repo.get_all(RentalScope::All, &search("cancel")).await?),
        vec![bobs.id]
    );
    assert_eq!(
        ids(repo.get_all(RentalScope::All, &search("CAR-")).await?),
        vec![bobs.id, alices.id]
    );

    Ok(())
}

/// Tests search stays inside the caller's scope.
///
/// Expected: Ok with no results when the match belongs to another user
#[tokio::test]
async fn search_respects_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _location, car) = factory::helpers::create_car_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;
    RentalFactory::new(db, owner.id, car.id).days(0, 2).build().await?;

    let rentals = RentalRepository::new(db)
        .get_all(RentalScope::User(other.id), &search(&car.car_id))
        .await?;

    assert!(rentals.is_empty());

    Ok(())
}
