//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Converting entity models into domain models
//! - **Transaction Management**: Running the rental check-and-write inside one transaction

use crate::server::error::AppError;

pub mod auth;
pub mod availability;
pub mod car;
pub mod dashboard;
pub mod location;
pub mod login_history;
pub mod rental;
pub mod seed;
pub mod user;

#[cfg(test)]
mod test;

/// Largest page size a list endpoint will serve.
pub(crate) const MAX_PER_PAGE: u64 = 100;

/// Clamps `per_page` to `1..=MAX_PER_PAGE` and rejects pages whose row offset
/// does not fit in a SQL integer.
///
/// # Returns
/// - `Ok(per_page)` - The clamped page size
/// - `Err(AppError::BadRequest)` - `page * per_page` overflows
pub(crate) fn check_page(page: u64, per_page: u64) -> Result<u64, AppError> {
    let per_page = per_page.clamp(1, MAX_PER_PAGE);

    match page.checked_mul(per_page) {
        Some(offset) if offset <= i64::MAX as u64 => Ok(per_page),
        _ => Err(AppError::BadRequest("Page is out of range".to_string())),
    }
}

/// Computes the number of pages needed for `total` items.
pub(crate) fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        total.div_ceil(per_page)
    } else {
        0
    }
}


/// Rejects a required text field that is empty after trimming.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }

    Ok(())
}
