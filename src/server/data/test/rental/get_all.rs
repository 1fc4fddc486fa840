use super::*;

/// Tests user scope hides other users' rentals and results are newest first.
///
/// Expected: Ok with only the user's rentals, latest start date first
#[tokio::test]
async fn scopes_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, location, car) = factory::helpers::create_car_with_dependencies(db).await?;
    let other_user = factory::create_user(db).await?;
    let other_car = factory::create_car(db, location.id).await?;

    let older = RentalFactory::new(db, user.id, car.id).days(0, 2).build().await?;
    let newer = RentalFactory::new(db, user.id, other_car.id)
        .days(4, 6)
        .build()
        .await?;
    RentalFactory::new(db, other_user.id, car.id)
        .days(10, 12)
        .build()
        .await?;

    let repo = RentalRepository::new(db);
    let mine = repo.get_all(RentalScope::User(user.id), &RentalFilter::default()).await?;
    let all = repo.get_all(RentalScope::All, &RentalFilter::default()).await?;

    assert_eq!(
        mine.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );
    assert_eq!(all.len(), 3);

    Ok(())
}

/// Expected: Ok with only active rentals
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _location, car) = factory::helpers::create_car_with_dependencies(db).await?;
    let active = RentalFactory::new(db, user.id, car.id).days(10, 12).build().await?;
    RentalFactory::new(db, user.id, car.id)
        .days(0, 2)
        .status("completed")
        .build()
        .await?;

    let rentals = RentalRepository::new(db)
        .get_all(
            RentalScope::All,
            &RentalFilter::default().with_status(RentalStatus::Active),
        )
        .await?;

    assert_eq!(rentals.len(), 1);
    assert_eq!(rentals[0].id, active.id);

    Ok(())
}

/// Tests a requested ordering replaces the newest-first default.
///
/// Expected: Ok with rentals by end date ascending, then by status descending
#[tokio::test]
async fn applies_requested_ordering() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _location, car) = factory::helpers::create_car_with_dependencies(db).await?;
    let late = RentalFactory::new(db, user.id, car.id).days(0, 9).build().await?;
    let early = RentalFactory::new(db, user.id, car.id)
        .days(2, 3)
        .status("completed")
        .build()
        .await?;
    let middle = RentalFactory::new(db, user.id, car.id)
        .days(4, 6)
        .status("cancelled")
        .build()
        .await?;

    let repo = RentalRepository::new(db);
    let by_end = repo
        .get_all(
            RentalScope::All,
            &RentalFilter {
                ordering: vec![SortKey {
                    field: RentalSortField::EndDate,
                    descending: false,
                }],
                ..Default::default()
            },
        )
        .await?;
    let by_status = repo
        .get_all(
            RentalScope::All,
            &RentalFilter {
                ordering: vec![SortKey {
                    field: RentalSortField::Status,
                    descending: true,
                }],
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(
        by_end.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![early.id, middle.id, late.id]
    );
    assert_eq!(
        by_status.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![early.id, middle.id, late.id]
    );

    Ok(())
}
