use sea_orm::DatabaseConnection;

use crate::server::{
    data::location::LocationRepository,
    error::AppError,
    model::location::{CreateLocationParams, Location, UpdateLocationParams},
    service::require_non_empty,
};

pub struct LocationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Location>, AppError> {
        let locations = LocationRepository::new(self.db).get_all().await?;

        Ok(locations.into_iter().map(Location::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Location>, AppError> {
        let location = LocationRepository::new(self.db).find_by_id(id).await?;

        Ok(location.map(Location::from_entity))
    }

    /// Creates a location after checking that name and address are present.
    pub async fn create(&self, params: CreateLocationParams) -> Result<Location, AppError> {
        require_non_empty(&params.name, "Name")?;
        require_non_empty(&params.address, "Address")?;

        let location = LocationRepository::new(self.db).create(&params).await?;

        Ok(Location::from_entity(location))
    }

    /// Updates a location.
    ///
    /// # Returns
    /// - `Ok(Location)` - The updated location
    /// - `Err(AppError::BadRequest)` - A provided field is empty
    /// - `Err(AppError::NotFound)` - Location does not exist
    pub async fn update(&self, params: UpdateLocationParams) -> Result<Location, AppError> {
        if let Some(name) = &params.name {
            require_non_empty(name, "Name")?;
        }
        if let Some(address) = &params.address {
            require_non_empty(address, "Address")?;
        }

        let location = LocationRepository::new(self.db)
            .update(&params)
            .await?
            .ok_or_else(|| AppError::NotFound("Location not found".to_string()))?;

        Ok(Location::from_entity(location))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !LocationRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Location not found".to_string()));
        }

        Ok(())
    }
}
