//! Shared helper utilities for factory methods.

use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Fixed reference instant used as "day 0" by rental factories.
///
/// A fixed instant keeps interval arithmetic in tests independent of the wall clock.
pub fn day0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Returns `day0() + days`.
pub fn day(days: i64) -> DateTime<Utc> {
    day0() + Duration::days(days)
}

/// Creates a user, a location and a car at that location.
///
/// # Returns
/// - `Ok((user, location, car))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_car_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::location::Model,
        entity::car::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let location = crate::factory::location::create_location(db).await?;
    let car = crate::factory::car::create_car(db, location.id).await?;

    Ok((user, location, car))
}
