//! HTTP request handlers.
//!
//! Controllers authenticate the request through `AuthGuard`, convert DTOs into
//! domain parameters, call the service layer and convert results back into DTOs.

pub mod auth;
pub mod car;
pub mod dashboard;
pub mod health;
pub mod location;
pub mod login_history;
pub mod rental;
pub mod user;
