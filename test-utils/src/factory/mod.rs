//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories insert
//! rows directly through SeaORM active models, bypassing the application's validation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let location = factory::location::create_location(&db).await?;
//! let car = factory::car::create_car(&db, location.id).await?;
//!
//! let rental = factory::rental::RentalFactory::new(&db, user.id, car.id)
//!     .days(0, 5)
//!     .status("active")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `location` - Create location entities
//! - `car` - Create car entities
//! - `rental` - Create rental entities
//! - `login_history` - Create login history entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod car;
pub mod helpers;
pub mod location;
pub mod login_history;
pub mod rental;
pub mod user;

pub use car::create_car;
pub use location::create_location;
pub use login_history::create_login;
pub use rental::create_rental;
pub use user::create_user;
