//! Sample data for demo and development databases.

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{car::CarStatus, rental::RentalStatus, user::Role},
    server::{
        data::{
            car::CarRepository, location::LocationRepository, rental::RentalRepository,
            user::UserRepository,
        },
        error::AppError,
        model::{
            car::CreateCarParams, location::CreateLocationParams, rental::CreateRentalParams,
            user::CreateUserParams,
        },
        util::password::hash_password,
    },
};

const SAMPLE_LOCATIONS: [(&str, &str); 3] = [
    ("Downtown", "123 Main St, Downtown"),
    ("Airport", "456 Airport Rd"),
    ("Suburban", "789 Oak Ave, Suburbia"),
];

/// `(make, model, year, location index, car ID)`
const SAMPLE_CARS: [(&str, &str, i32, usize, &str); 6] = [
    ("Toyota", "Camry", 2022, 0, "CAR-001"),
    ("Honda", "Civic", 2021, 0, "CAR-002"),
    ("Ford", "Mustang", 2023, 1, "CAR-003"),
    ("Chevrolet", "Malibu", 2022, 1, "CAR-004"),
    ("Nissan", "Altima", 2021, 2, "CAR-005"),
    ("BMW", "3 Series", 2023, 2, "CAR-006"),
];

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts sample locations, cars, a regular `user` account and two rentals.
    ///
    /// Does nothing when both locations and cars already exist. Everything is
    /// written in a single transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Sample data was inserted
    /// - `Ok(false)` - Data already present; nothing changed
    /// - `Err(AppError)` - Database or hashing error; nothing was written
    pub async fn seed_sample_data(&self) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let location_repo = LocationRepository::new(&txn);
        let car_repo = CarRepository::new(&txn);

        if location_repo.count().await? > 0 && car_repo.count().await? > 0 {
            tracing::info!("Sample data already exists, skipping seeding");
            return Ok(false);
        }

        let user_repo = UserRepository::new(&txn);
        let user = match user_repo.find_by_username("user").await? {
            Some(user) => user,
            None => {
                let params = CreateUserParams {
                    username: "user".to_string(),
                    email: "user@example.com".to_string(),
                    password: "user123".to_string(),
                    role: Role::User,
                };
                let password_hash = hash_password(&params.password)?;
                user_repo.create(&params, password_hash).await?
            }
        };

        let mut locations = Vec::with_capacity(SAMPLE_LOCATIONS.len());
        for (name, address) in SAMPLE_LOCATIONS {
            let location = location_repo
                .create(&CreateLocationParams {
                    name: name.to_string(),
                    address: address.to_string(),
                })
                .await?;
            locations.push(location);
        }

        let mut cars = Vec::with_capacity(SAMPLE_CARS.len());
        for (make, model, year, location_index, car_id) in SAMPLE_CARS {
            let car = car_repo
                .create(&CreateCarParams {
                    make: make.to_string(),
                    model: model.to_string(),
                    year,
                    location_id: locations[location_index].id,
                    status: CarStatus::Available,
                    car_id: car_id.to_string(),
                })
                .await?;
            cars.push(car);
        }

        let now = Utc::now();
        let rental_repo = RentalRepository::new(&txn);
        rental_repo
            .create(&CreateRentalParams {
                user_id: user.id,
                car_id: cars[0].id,
                start_date: now - Duration::days(1),
                end_date: now + Duration::days(3),
                status: RentalStatus::Active,
            })
            .await?;
        rental_repo
            .create(&CreateRentalParams {
                user_id: user.id,
                car_id: cars[1].id,
                start_date: now - Duration::days(10),
                end_date: now - Duration::days(5),
                status: RentalStatus::Completed,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Seeded {} locations, {} cars and 2 rentals",
            locations.len(),
            cars.len()
        );

        Ok(true)
    }
}
