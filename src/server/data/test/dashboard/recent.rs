use super::*;

/// Tests recent logins respect the limit and the `as_of` cutoff.
///
/// Expected: Ok with the two latest logins not after day 3
#[tokio::test]
async fn recent_logins_respect_limit_and_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for n in 0..5 {
        factory::create_login(db, user.id, day(n)).await?;
    }

    let logins = DashboardRepository::new(db)
        .recent_logins(2, Some(day(3)))
        .await?;

    let timestamps: Vec<_> = logins.iter().map(|(login, _)| login.timestamp).collect();
    assert_eq!(timestamps, vec![day(3), day(2)]);
    assert!(logins.iter().all(|(_, u)| u.is_some()));

    Ok(())
}

/// Tests recent rentals carry their user and car rows.
///
/// Expected: Ok with the latest rental first and both parties joined
#[tokio::test]
async fn recent_rentals_include_parties() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _location, car) = factory::helpers::create_car_with_dependencies(db).await?;
    RentalFactory::new(db, user.id, car.id).days(0, 1).build().await?;
    let latest = RentalFactory::new(db, user.id, car.id).days(2, 3).build().await?;

    let rentals = DashboardRepository::new(db).recent_rentals(10, None).await?;

    assert_eq!(rentals.len(), 2);
    let (rental, rental_user, rental_car) = &rentals[0];
    assert_eq!(rental.id, latest.id);
    assert_eq!(rental_user.as_ref().map(|u| u.id), Some(user.id));
    assert_eq!(rental_car.as_ref().map(|c| c.id), Some(car.id));

    Ok(())
}
