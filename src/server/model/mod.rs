//! Domain models and operation parameter types.
//!
//! Domain models are converted from SeaORM entities at the repository boundary and
//! into wire DTOs at the controller boundary. Stored enum columns are parsed here so
//! the service layer only ever sees typed values.

pub mod car;
pub mod dashboard;
pub mod location;
pub mod login_history;
pub mod ordering;
pub mod rental;
pub mod user;
