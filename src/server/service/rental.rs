//! Rental service.
//!
//! Creating or re-dating a rental runs the availability check and the write on a
//! single transaction. The target car row is claimed first, so two requests for
//! the same car cannot both pass the check before either has written.

use chrono::{DateTime, Utc};
use sea_orm::{
    sqlx::{self, error::DatabaseError},
    ConnectionTrait, DatabaseConnection, DbErr, RuntimeErr, TransactionTrait,
};

use crate::{
    model::rental::RentalStatus,
    server::{
        data::{car::CarRepository, rental::RentalRepository, user::UserRepository},
        error::AppError,
        model::{
            car::Car,
            rental::{CreateRentalParams, Rental, RentalFilter, RentalScope, UpdateRentalParams},
            user::User,
        },
        service::availability::AvailabilityChecker,
    },
};

pub const CAR_UNAVAILABLE: &str = "This car is not available for the selected dates";

/// Primary SQLite result codes for a write lock held by another connection.
const SQLITE_BUSY: i32 = 5;
const SQLITE_LOCKED: i32 = 6;

pub struct RentalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RentalService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets rentals visible in `scope` with user and car details.
    ///
    /// # Arguments
    /// - `scope` - Which users' rentals to include
    /// - `filter` - Optional status, search text and ordering
    pub async fn get_all(
        &self,
        scope: RentalScope,
        filter: &RentalFilter,
    ) -> Result<Vec<Rental>, AppError> {
        let rentals = RentalRepository::new(self.db).get_all(scope, filter).await?;

        load_details(self.db, rentals).await
    }

    /// Gets a single rental with details.
    ///
    /// # Returns
    /// - `Ok(Some(Rental))` - Rental exists and is visible in `scope`
    /// - `Ok(None)` - Rental does not exist or belongs to another user
    /// - `Err(AppError)` - Database error
    pub async fn get_by_id(
        &self,
        id: i32,
        scope: RentalScope,
    ) -> Result<Option<Rental>, AppError> {
        let Some(rental) = RentalRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };
        if !scope.permits(rental.user_id) {
            return Ok(None);
        }

        Ok(load_details(self.db, vec![rental]).await?.pop())
    }

    /// Creates a rental on behalf of `caller`.
    ///
    /// # Returns
    /// - `Ok(Rental)` - The created rental with details
    /// - `Err(AppError::Forbidden)` - A non-admin tried to book for another user
    /// - `Err(AppError::BadRequest)` - Invalid dates, unknown user or unknown car
    /// - `Err(AppError::Conflict)` - The car is already booked for an overlapping period
    pub async fn create(
        &self,
        params: CreateRentalParams,
        caller: &User,
    ) -> Result<Rental, AppError> {
        if !caller.is_admin() && params.user_id != caller.id {
            return Err(AppError::Forbidden(
                "You can only create rentals for yourself".to_string(),
            ));
        }
        validate_interval(params.start_date, params.end_date)?;

        let rental = self
            .create_in_transaction(&params)
            .await
            .map_err(into_write_conflict)?;

        tracing::info!(
            "Rental {} created for car {} by user {}",
            rental.id,
            rental.car_id,
            rental.user_id
        );

        load_details(self.db, vec![rental])
            .await?
            .pop()
            .ok_or_else(|| AppError::NotFound("Rental not found after creation".to_string()))
    }

    async fn create_in_transaction(
        &self,
        params: &CreateRentalParams,
    ) -> Result<entity::rental::Model, AppError> {
        let txn = self.db.begin().await?;

        // Write first: a transaction that has only read cannot wait for the lock.
        claim_car(&txn, params.car_id).await?;
        require_user(&txn, params.user_id).await?;

        if params.status == RentalStatus::Active {
            require_available(&txn, params.car_id, params.start_date, params.end_date, None)
                .await?;
        }

        let rental = RentalRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        Ok(rental)
    }

    /// Applies a partial update to a rental.
    ///
    /// The provided fields are merged with the stored rental and the result is
    /// validated as a whole. When the merged status is active the availability
    /// check runs with the rental itself excluded.
    ///
    /// # Returns
    /// - `Ok(Rental)` - The updated rental with details
    /// - `Err(AppError::NotFound)` - Rental does not exist or is outside the caller's scope
    /// - `Err(AppError::Forbidden)` - A non-admin tried to reassign the rental
    /// - `Err(AppError::BadRequest)` - Invalid merged dates, unknown user or unknown car
    /// - `Err(AppError::Conflict)` - The merged booking overlaps another active rental
    pub async fn update(
        &self,
        params: UpdateRentalParams,
        caller: &User,
    ) -> Result<Rental, AppError> {
        if !caller.is_admin() && params.user_id.is_some_and(|id| id != caller.id) {
            return Err(AppError::Forbidden(
                "You can only assign rentals to yourself".to_string(),
            ));
        }

        let rental = self
            .update_in_transaction(params, RentalScope::for_user(caller))
            .await
            .map_err(into_write_conflict)?;

        tracing::info!("Rental {} updated by user {}", rental.id, caller.id);

        load_details(self.db, vec![rental])
            .await?
            .pop()
            .ok_or_else(|| AppError::NotFound("Rental not found".to_string()))
    }

    async fn update_in_transaction(
        &self,
        params: UpdateRentalParams,
        scope: RentalScope,
    ) -> Result<entity::rental::Model, AppError> {
        let txn = self.db.begin().await?;
        let repo = RentalRepository::new(&txn);

        let existing = match repo.find_by_id(params.id).await? {
            Some(rental) if scope.permits(rental.user_id) => Rental::from_entity(rental)?,
            _ => return Err(AppError::NotFound("Rental not found".to_string())),
        };

        let user_id = params.user_id.unwrap_or(existing.user_id);
        let car_id = params.car_id.unwrap_or(existing.car_id);
        let start_date = params.start_date.unwrap_or(existing.start_date);
        let end_date = params.end_date.unwrap_or(existing.end_date);
        let status = params.status.unwrap_or(existing.status);

        validate_interval(start_date, end_date)?;

        if user_id != existing.user_id {
            require_user(&txn, user_id).await?;
        }
        claim_car(&txn, car_id).await?;

        if status == RentalStatus::Active {
            require_available(&txn, car_id, start_date, end_date, Some(existing.id)).await?;
        }

        let rental = repo
            .update(&params)
            .await?
            .ok_or_else(|| AppError::NotFound("Rental not found".to_string()))?;

        txn.commit().await?;

        Ok(rental)
    }

    /// Deletes a rental owned by the caller, or any rental for admins.
    pub async fn delete(&self, id: i32, caller: &User) -> Result<(), AppError> {
        let repo = RentalRepository::new(self.db);
        let scope = RentalScope::for_user(caller);

        match repo.find_by_id(id).await? {
            Some(rental) if scope.permits(rental.user_id) => {}
            _ => return Err(AppError::NotFound("Rental not found".to_string())),
        }

        repo.delete(id).await?;

        tracing::info!("Rental {} deleted by user {}", id, caller.id);

        Ok(())
    }
}

fn validate_interval(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), AppError> {
    if end <= start {
        return Err(AppError::BadRequest(
            "End date must be after start date".to_string(),
        ));
    }

    Ok(())
}

async fn require_user<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<(), AppError> {
    if UserRepository::new(db).find_by_id(user_id).await?.is_none() {
        return Err(AppError::BadRequest(format!(
            "User {} does not exist",
            user_id
        )));
    }

    Ok(())
}

async fn claim_car<C: ConnectionTrait>(db: &C, car_id: i32) -> Result<(), AppError> {
    if !CarRepository::new(db).claim(car_id).await? {
        return Err(AppError::BadRequest(format!("Car {} does not exist", car_id)));
    }

    Ok(())
}

async fn require_available<C: ConnectionTrait>(
    db: &C,
    car_id: i32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    exclude_rental_id: Option<i32>,
) -> Result<(), AppError> {
    let conflict = AvailabilityChecker::new(db)
        .find_conflict(car_id, start, end, exclude_rental_id)
        .await?;

    if let Some(conflict) = conflict {
        tracing::debug!(
            "Car {} unavailable: overlaps rental {} ({} - {})",
            car_id,
            conflict.id,
            conflict.start_date,
            conflict.end_date
        );
        return Err(AppError::Conflict(CAR_UNAVAILABLE.to_string()));
    }

    Ok(())
}

/// Turns a lost lock race into a conflict; any other error passes through.
fn into_write_conflict(err: AppError) -> AppError {
    match err {
        AppError::DbErr(db_err) if is_lock_error(&db_err) => {
            tracing::warn!("Rental write lost a lock race: {}", db_err);
            AppError::Conflict(CAR_UNAVAILABLE.to_string())
        }
        err => err,
    }
}

/// Whether the database refused the statement because another connection holds
/// the lock. Extended codes such as `SQLITE_BUSY_SNAPSHOT` carry the primary code
/// in their low byte.
fn is_lock_error(err: &DbErr) -> bool {
    let (DbErr::Conn(RuntimeErr::SqlxError(err))
    | DbErr::Exec(RuntimeErr::SqlxError(err))
    | DbErr::Query(RuntimeErr::SqlxError(err))) = err
    else {
        return false;
    };
    let sqlx::Error::Database(db_err) = &**err else {
        return false;
    };

    DatabaseError::code(&**db_err)
        .and_then(|code| code.parse::<i32>().ok())
        .is_some_and(|code| matches!(code & 0xff, SQLITE_BUSY | SQLITE_LOCKED))
}

/// Attaches user and car details to rental rows, preserving their order.
async fn load_details<C: ConnectionTrait>(
    db: &C,
    rentals: Vec<entity::rental::Model>,
) -> Result<Vec<Rental>, AppError> {
    let user_ids: Vec<i32> = rentals.iter().map(|r| r.user_id).collect();
    let car_ids: Vec<i32> = rentals.iter().map(|r| r.car_id).collect();

    let users = UserRepository::new(db).get_by_ids(&user_ids).await?;
    let cars = CarRepository::new(db).get_by_ids(&car_ids).await?;

    rentals
        .into_iter()
        .map(|rental| -> Result<Rental, AppError> {
            let user = users
                .get(&rental.user_id)
                .cloned()
                .map(User::from_entity)
                .transpose()?;
            let car = cars
                .get(&rental.car_id)
                .cloned()
                .map(|(car, location)| Car::from_entity(car, location))
                .transpose()?;

            Ok(Rental::from_entity(rental)?.with_details(user, car))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expected: errors without a SQLite result code are never read as lock errors,
    /// whatever their message says
    #[test]
    fn errors_without_result_code_pass_through() {
        let locked_text = into_write_conflict(AppError::DbErr(DbErr::Custom(
            "database is locked".to_string(),
        )));
        let disk_full = into_write_conflict(AppError::DbErr(DbErr::Custom("disk full".to_string())));

        assert!(matches!(locked_text, AppError::DbErr(_)));
        assert!(matches!(disk_full, AppError::DbErr(_)));
    }
}
