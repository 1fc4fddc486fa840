use test_utils::builder::TestBuilder;

use crate::server::{
    data::{car::CarRepository, location::LocationRepository, rental::RentalRepository},
    error::AppError,
    service::seed::SeedService,
};

/// Tests seeding fills an empty database once and leaves it alone afterwards.
///
/// Expected: true then false, with counts unchanged by the second run
#[tokio::test]
async fn seeds_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SeedService::new(db);

    assert!(service.seed_sample_data().await?);
    assert!(!service.seed_sample_data().await?);

    assert_eq!(LocationRepository::new(db).count().await?, 3);
    assert_eq!(CarRepository::new(db).count().await?, 6);
    assert_eq!(RentalRepository::new(db).count().await?, 2);

    Ok(())
}
