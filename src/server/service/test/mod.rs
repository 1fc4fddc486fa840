use crate::server::{error::AppError, model::user::User};

mod auth;
mod car;
mod seed;

/// Converts a factory-built row into the domain user used as a caller.
fn as_caller(entity: entity::user::Model) -> Result<User, AppError> {
    User::from_entity(entity)
}
