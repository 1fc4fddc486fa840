//! Rentaldesk Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the rental
//! backend. This crate offers a builder pattern for creating test contexts with SQLite
//! databases, in memory or in a temporary file, and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_rental_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_rental_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (user, _location, car) = factory::helpers::create_car_with_dependencies(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
