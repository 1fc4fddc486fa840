//! Car factory for creating test car entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let car = CarFactory::new(&db, location.id)
///     .make("Toyota")
///     .model("Camry")
///     .status("rented")
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    location_id: i32,
    make: String,
    model: String,
    year: i32,
    status: String,
    car_id: String,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - make: `"Make {id}"`, model: `"Model {id}"`, year: `2024`
    /// - status: `"available"`
    /// - car_id: `"CAR-{id}"`
    pub fn new(db: &'a DatabaseConnection, location_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            location_id,
            make: format!("Make {}", id),
            model: format!("Model {}", id),
            year: 2024,
            status: "available".to_string(),
            car_id: format!("CAR-{:05}", id),
        }
    }

    pub fn make(mut self, make: impl Into<String>) -> Self {
        self.make = make.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Sets the raw status value (`available`, `rented` or `maintenance`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn car_id(mut self, car_id: impl Into<String>) -> Self {
        self.car_id = car_id.into();
        self
    }

    /// Builds and inserts the car entity into the database.
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            make: ActiveValue::Set(self.make),
            model: ActiveValue::Set(self.model),
            year: ActiveValue::Set(self.year),
            location_id: ActiveValue::Set(self.location_id),
            status: ActiveValue::Set(self.status),
            car_id: ActiveValue::Set(self.car_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available car at the given location.
pub async fn create_car(
    db: &DatabaseConnection,
    location_id: i32,
) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db, location_id).build().await
}
