//! SeaORM entity models for the rental database schema.

pub mod prelude;

pub mod car;
pub mod location;
pub mod login_history;
pub mod rental;
pub mod user;
