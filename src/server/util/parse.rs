use crate::{
    model::{car::CarStatus, rental::RentalStatus, user::Role},
    server::error::{internal::InternalError, AppError},
};

/// Parses a stored role string
///
/// # Arguments
/// - `value` - The role column value
///
/// # Returns
/// - `Ok(Role)` - Successfully parsed role
/// - `Err(AppError::InternalErr(UnknownEnumValue))` - Value is not a known role
pub fn parse_role(value: &str) -> Result<Role, AppError> {
    Role::parse(value).ok_or_else(|| unknown("role", value))
}

/// Parses a stored car status string
///
/// # Returns
/// - `Ok(CarStatus)` - Successfully parsed status
/// - `Err(AppError::InternalErr(UnknownEnumValue))` - Value is not a known car status
pub fn parse_car_status(value: &str) -> Result<CarStatus, AppError> {
    CarStatus::parse(value).ok_or_else(|| unknown("car status", value))
}

/// Parses a stored rental status string
///
/// # Returns
/// - `Ok(RentalStatus)` - Successfully parsed status
/// - `Err(AppError::InternalErr(UnknownEnumValue))` - Value is not a known rental status
pub fn parse_rental_status(value: &str) -> Result<RentalStatus, AppError> {
    RentalStatus::parse(value).ok_or_else(|| unknown("rental status", value))
}

fn unknown(kind: &'static str, value: &str) -> AppError {
    InternalError::UnknownEnumValue {
        kind,
        value: value.to_string(),
    }
    .into()
}
