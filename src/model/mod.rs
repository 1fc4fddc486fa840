//! Wire-level request and response types.
//!
//! DTOs in this module define the JSON contract of the REST API. Field names follow
//! the existing frontend: resource payloads use snake_case, dashboard payloads use
//! camelCase.

pub mod api;
pub mod car;
pub mod dashboard;
pub mod location;
pub mod login_history;
pub mod rental;
pub mod user;
