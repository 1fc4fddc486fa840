use super::*;

/// Tests rentals of every status are counted per car and cars without rentals are left out.
///
/// Expected: Ok with counts 2 and 1, unrented car absent
#[tokio::test]
async fn counts_rentals_per_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, location, toyota) = factory::helpers::create_car_with_dependencies(db).await?;
    let honda = factory::create_car(db, location.id).await?;
    let unrented = factory::create_car(db, location.id).await?;

    RentalFactory::new(db, user.id, toyota.id)
        .days(0, 2)
        .status("completed")
        .build()
        .await?;
    RentalFactory::new(db, user.id, toyota.id).days(3, 5).build().await?;
    RentalFactory::new(db, user.id, honda.id)
        .days(0, 2)
        .status("cancelled")
        .build()
        .await?;

    let mut counts: Vec<(i32, u64)> = DashboardRepository::new(db)
        .rental_counts()
        .await?
        .into_iter()
        .map(|(car, count)| (car.id, count))
        .collect();
    counts.sort();

    assert_eq!(counts, vec![(toyota.id, 2), (honda.id, 1)]);
    assert!(counts.iter().all(|(id, _)| *id != unrented.id));

    Ok(())
}
