//! Rental availability checking.
//!
//! A car is available for `[start, end)` when none of its active rentals overlap
//! that interval. Intervals are half-open: a rental ending exactly when another
//! starts does not conflict with it.
//!
//! The checker is generic over the connection so that rental writes can run it on
//! the same transaction that subsequently inserts or updates the rental, after the
//! car row has been claimed with [`CarRepository::claim`].
//!
//! [`CarRepository::claim`]: crate::server::data::car::CarRepository::claim

use chrono::{DateTime, Utc};
use sea_orm::ConnectionTrait;

use crate::server::{data::rental::RentalRepository, error::AppError, model::rental::Rental};

/// Returns whether `[a_start, a_end)` and `[b_start, b_end)` overlap.
pub fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && a_end > b_start
}

pub struct AvailabilityChecker<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvailabilityChecker<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds an active rental of the car that overlaps the requested interval.
    ///
    /// # Arguments
    /// - `car_id` - Car to check
    /// - `start` - Requested start, inclusive; must be before `end`
    /// - `end` - Requested end, exclusive
    /// - `exclude_rental_id` - Rental to ignore, used when re-validating an update
    ///
    /// # Returns
    /// - `Ok(Some(Rental))` - A conflicting rental
    /// - `Ok(None)` - The car is free for the interval
    /// - `Err(AppError)` - Database error
    pub async fn find_conflict(
        &self,
        car_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude_rental_id: Option<i32>,
    ) -> Result<Option<Rental>, AppError> {
        RentalRepository::new(self.db)
            .find_conflict(car_id, start, end, exclude_rental_id)
            .await?
            .map(Rental::from_entity)
            .transpose()
    }

    /// Returns whether the car has no active rental overlapping `[start, end)`.
    pub async fn is_available(
        &self,
        car_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude_rental_id: Option<i32>,
    ) -> Result<bool, AppError> {
        Ok(self
            .find_conflict(car_id, start, end, exclude_rental_id)
            .await?
            .is_none())
    }
}
