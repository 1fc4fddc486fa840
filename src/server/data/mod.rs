//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories return SeaORM entity models and leave conversion
//! into domain models to the service layer. Every repository is generic over
//! `ConnectionTrait` so the same queries run against the pool or inside a transaction.

pub mod car;
pub mod dashboard;
pub mod location;
pub mod login_history;
pub mod rental;
pub mod user;

#[cfg(test)]
mod test;
