use sea_orm::DatabaseConnection;

use crate::server::{
    data::{car::CarRepository, location::LocationRepository},
    error::AppError,
    model::car::{Car, CarFilter, CreateCarParams, PaginatedCars, UpdateCarParams},
    service::{check_page, require_non_empty, total_pages},
};

const DUPLICATE_CAR: &str = "A car with that car ID already exists";

pub struct CarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a filtered page of cars with their locations.
    ///
    /// Oversized pages are clamped; a page whose offset overflows is a `BadRequest`.
    pub async fn get_filtered(&self, mut filter: CarFilter) -> Result<PaginatedCars, AppError> {
        filter.per_page = check_page(filter.page, filter.per_page)?;
        let (cars, total) = CarRepository::new(self.db).get_filtered(&filter).await?;

        let cars = cars
            .into_iter()
            .map(|(car, location)| Car::from_entity(car, location))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedCars {
            cars,
            total,
            page: filter.page,
            per_page: filter.per_page,
            total_pages: total_pages(total, filter.per_page),
        })
    }

    /// Gets every car currently marked available.
    pub async fn get_available(&self) -> Result<Vec<Car>, AppError> {
        CarRepository::new(self.db)
            .get_available()
            .await?
            .into_iter()
            .map(|(car, location)| Car::from_entity(car, location))
            .collect()
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Car>, AppError> {
        CarRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(|(car, location)| Car::from_entity(car, location))
            .transpose()
    }

    /// Creates a car.
    ///
    /// # Returns
    /// - `Ok(Car)` - The created car with its location
    /// - `Err(AppError::BadRequest)` - Missing field, invalid year or unknown location
    /// - `Err(AppError::Conflict)` - The car ID is already in use
    pub async fn create(&self, params: CreateCarParams) -> Result<Car, AppError> {
        require_non_empty(&params.make, "Make")?;
        require_non_empty(&params.model, "Model")?;
        require_non_empty(&params.car_id, "Car ID")?;
        validate_year(params.year)?;
        self.require_location(params.location_id).await?;

        let car = CarRepository::new(self.db)
            .create(&params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, DUPLICATE_CAR))?;

        self.get_by_id(car.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found after creation".to_string()))
    }

    /// Updates a car.
    ///
    /// # Returns
    /// - `Ok(Car)` - The updated car with its location
    /// - `Err(AppError::BadRequest)` - Empty field, invalid year or unknown location
    /// - `Err(AppError::NotFound)` - Car does not exist
    /// - `Err(AppError::Conflict)` - The new car ID is already in use
    pub async fn update(&self, params: UpdateCarParams) -> Result<Car, AppError> {
        if let Some(make) = &params.make {
            require_non_empty(make, "Make")?;
        }
        if let Some(model) = &params.model {
            require_non_empty(model, "Model")?;
        }
        if let Some(car_id) = &params.car_id {
            require_non_empty(car_id, "Car ID")?;
        }
        if let Some(year) = params.year {
            validate_year(year)?;
        }
        if let Some(location_id) = params.location_id {
            self.require_location(location_id).await?;
        }

        let car = CarRepository::new(self.db)
            .update(&params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, DUPLICATE_CAR))?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        self.get_by_id(car.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))
    }

    /// Deletes a car together with its rentals.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CarRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Car not found".to_string()));
        }

        Ok(())
    }

    async fn require_location(&self, location_id: i32) -> Result<(), AppError> {
        if LocationRepository::new(self.db)
            .find_by_id(location_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Location {} does not exist",
                location_id
            )));
        }

        Ok(())
    }
}

fn validate_year(year: i32) -> Result<(), AppError> {
    if year <= 0 {
        return Err(AppError::BadRequest(
            "Year must be a positive number".to_string(),
        ));
    }

    Ok(())
}
