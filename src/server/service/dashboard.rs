//! Dashboard aggregation.
//!
//! Combines entity counts, a merged activity feed of logins and rental starts, and
//! a ranking of the most rented cars. The three parts are read independently and
//! need not form a single snapshot.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{car::CarStatus, rental::RentalStatus},
    server::{
        data::{
            car::CarRepository, dashboard::DashboardRepository, rental::RentalRepository,
            user::UserRepository,
        },
        error::AppError,
        model::dashboard::{Activity, Dashboard, DashboardStats, PopularCar},
        util::parse::{parse_car_status, parse_rental_status},
    },
};

/// Number of entries in the activity feed, and per source before merging.
pub const ACTIVITY_LIMIT: usize = 10;
/// Number of cars in the popularity ranking.
pub const POPULAR_CARS_LIMIT: usize = 5;

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the dashboard.
    ///
    /// # Arguments
    /// - `as_of` - Only events at or before this instant appear in the activity feed
    ///
    /// # Returns
    /// - `Ok(Dashboard)` - Stats, activity and popular cars; empty data yields zeros
    /// - `Err(AppError)` - Database error
    pub async fn compute(&self, as_of: Option<DateTime<Utc>>) -> Result<Dashboard, AppError> {
        Ok(Dashboard {
            stats: self.stats().await?,
            activity: self.activity(as_of).await?,
            popular_cars: self.popular_cars().await?,
        })
    }

    pub async fn stats(&self) -> Result<DashboardStats, AppError> {
        let cars = CarRepository::new(self.db);
        let rentals = RentalRepository::new(self.db);

        Ok(DashboardStats {
            cars: cars.count().await?,
            available_cars: cars.count_by_status(CarStatus::Available).await?,
            rented_cars: cars.count_by_status(CarStatus::Rented).await?,
            maintenance_cars: cars.count_by_status(CarStatus::Maintenance).await?,
            rentals: rentals.count().await?,
            active_rentals: rentals.count_by_status(RentalStatus::Active).await?,
            completed_rentals: rentals.count_by_status(RentalStatus::Completed).await?,
            users: UserRepository::new(self.db).count().await?,
        })
    }

    /// Builds the activity feed from the latest logins and rental starts.
    pub async fn activity(
        &self,
        as_of: Option<DateTime<Utc>>,
    ) -> Result<Vec<Activity>, AppError> {
        let repo = DashboardRepository::new(self.db);

        let logins = repo
            .recent_logins(ACTIVITY_LIMIT as u64, as_of)
            .await?
            .into_iter()
            .map(|(login, user)| Activity::Login {
                id: login.id,
                user_id: login.user_id,
                username: user.map(|u| u.username).unwrap_or_default(),
                timestamp: login.timestamp,
            })
            .collect();

        let rentals = repo
            .recent_rentals(ACTIVITY_LIMIT as u64, as_of)
            .await?
            .into_iter()
            .map(|(rental, user, car)| {
                Ok(Activity::Rental {
                    id: rental.id,
                    user_id: rental.user_id,
                    username: user.map(|u| u.username).unwrap_or_default(),
                    car_id: car.as_ref().map(|c| c.car_id.clone()).unwrap_or_default(),
                    car_name: car
                        .as_ref()
                        .map(|c| format!("{} {}", c.make, c.model))
                        .unwrap_or_default(),
                    status: parse_rental_status(&rental.status)?,
                    timestamp: rental.start_date,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(merge_activity(logins, rentals, ACTIVITY_LIMIT))
    }

    /// Ranks cars by total rentals of any status.
    pub async fn popular_cars(&self) -> Result<Vec<PopularCar>, AppError> {
        let counts = DashboardRepository::new(self.db)
            .rental_counts()
            .await?
            .into_iter()
            .map(|(car, rental_count)| {
                Ok(PopularCar {
                    id: car.id,
                    status: parse_car_status(&car.status)?,
                    make: car.make,
                    model: car.model,
                    year: car.year,
                    rental_count,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(rank_popular_cars(counts, POPULAR_CARS_LIMIT))
    }
}

/// Merges login and rental events into one feed, newest first, truncated to `limit`.
///
/// Events sharing a timestamp are ordered logins first, then by descending ID, so
/// the result is deterministic for a given input.
pub fn merge_activity(
    logins: Vec<Activity>,
    rentals: Vec<Activity>,
    limit: usize,
) -> Vec<Activity> {
    let mut activity: Vec<Activity> = logins.into_iter().chain(rentals).collect();

    activity.sort_by(|a, b| {
        b.timestamp()
            .cmp(&a.timestamp())
            .then_with(|| a.tie_break().cmp(&b.tie_break()))
    });
    activity.truncate(limit);

    activity
}

/// Orders cars by rental count descending, then car ID ascending, keeping the
/// first `limit`. Cars with a zero count are dropped.
pub fn rank_popular_cars(cars: Vec<PopularCar>, limit: usize) -> Vec<PopularCar> {
    let mut cars: Vec<PopularCar> = cars.into_iter().filter(|c| c.rental_count > 0).collect();

    cars.sort_by(|a, b| b.rental_count.cmp(&a.rental_count).then(a.id.cmp(&b.id)));
    cars.truncate(limit);

    cars
}
