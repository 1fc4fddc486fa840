//! Rental factory for creating test rental entities.
//!
//! Rentals are inserted directly, so the factory can create overlapping or otherwise
//! invalid rows when a test needs them.

use crate::factory::helpers::day;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rentals with customizable fields.
pub struct RentalFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    car_id: i32,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    status: String,
}

impl<'a> RentalFactory<'a> {
    /// Creates a new RentalFactory with default values.
    ///
    /// Defaults:
    /// - interval: `[day(0), day(5))`
    /// - status: `"active"`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, car_id: i32) -> Self {
        Self {
            db,
            user_id,
            car_id,
            start_date: day(0),
            end_date: day(5),
            status: "active".to_string(),
        }
    }

    /// Sets the interval to `[day(start), day(end))`.
    pub fn days(mut self, start: i64, end: i64) -> Self {
        self.start_date = day(start);
        self.end_date = day(end);
        self
    }

    pub fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = end_date;
        self
    }

    /// Sets the raw status value (`active`, `completed` or `cancelled`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the rental entity into the database.
    pub async fn build(self) -> Result<entity::rental::Model, DbErr> {
        entity::rental::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            car_id: ActiveValue::Set(self.car_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active rental over `[day(0), day(5))`.
pub async fn create_rental(
    db: &DatabaseConnection,
    user_id: i32,
    car_id: i32,
) -> Result<entity::rental::Model, DbErr> {
    RentalFactory::new(db, user_id, car_id).build().await
}
