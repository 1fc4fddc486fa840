//! Domain models for fleet cars.
//!
//! Defines the car domain model, the filter used by the car list and the
//! parameter types for car mutations.

use crate::{
    model::car::{CarDto, CarQuery, CarStatus, CreateCarDto, PaginatedCarsDto, UpdateCarDto},
    server::{
        error::AppError,
        model::{
            location::Location,
            ordering::{parse_ordering, SortKey},
        },
        util::parse::parse_car_status,
    },
};

/// Default page size for the car list.
pub const DEFAULT_CARS_PER_PAGE: u64 = 25;

/// Car in the rental fleet.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub location_id: i32,
    pub status: CarStatus,
    /// External fleet identifier, unique across all cars.
    pub car_id: String,
    /// Location details when loaded alongside the car.
    pub location: Option<Location>,
}

impl Car {
    /// Converts an entity model, optionally joined with its location, to a car
    /// domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The car entity model
    /// - `location` - The joined location entity, if it was loaded
    ///
    /// # Returns
    /// - `Ok(Car)` - The converted car
    /// - `Err(AppError::InternalErr(_))` - Stored status is not recognised
    pub fn from_entity(
        entity: entity::car::Model,
        location: Option<entity::location::Model>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            status: parse_car_status(&entity.status)?,
            make: entity.make,
            model: entity.model,
            year: entity.year,
            location_id: entity.location_id,
            car_id: entity.car_id,
            location: location.map(Location::from_entity),
        })
    }

    /// Human readable name used in activity entries, e.g. `Toyota Camry`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }

    pub fn into_dto(self) -> CarDto {
        CarDto {
            id: self.id,
            make: self.make,
            model: self.model,
            year: self.year,
            location: self.location_id,
            location_details: self.location.map(Location::into_dto),
            status: self.status,
            car_id: self.car_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedCars {
    pub cars: Vec<Car>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedCars {
    pub fn into_dto(self) -> PaginatedCarsDto {
        PaginatedCarsDto {
            cars: self.cars.into_iter().map(Car::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Fields the car list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarSortField {
    Make,
    Model,
    Year,
    Status,
}

impl CarSortField {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "make" => Some(Self::Make),
            "model" => Some(Self::Model),
            "year" => Some(Self::Year),
            "status" => Some(Self::Status),
            _ => None,
        }
    }
}

/// Filter, sort order and page selection for the car list.
#[derive(Debug, Clone, Default)]
pub struct CarFilter {
    /// Case-insensitive substring matched against make, model, year, car ID and status.
    pub search: Option<String>,
    pub status: Option<CarStatus>,
    /// Requested order; empty means make then model.
    pub ordering: Vec<SortKey<CarSortField>>,
    pub page: u64,
    pub per_page: u64,
}

impl CarFilter {
    pub fn from_query(query: CarQuery) -> Self {
        Self {
            search: query
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            status: query.status,
            ordering: query
                .ordering
                .as_deref()
                .map(|o| parse_ordering(o, CarSortField::parse))
                .unwrap_or_default(),
            page: query.page,
            per_page: query
                .per_page
                .filter(|p| *p > 0)
                .unwrap_or(DEFAULT_CARS_PER_PAGE),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCarParams {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub location_id: i32,
    pub status: CarStatus,
    pub car_id: String,
}

impl CreateCarParams {
    pub fn from_dto(dto: CreateCarDto) -> Self {
        Self {
            make: dto.make.trim().to_string(),
            model: dto.model.trim().to_string(),
            year: dto.year,
            location_id: dto.location,
            status: dto.status,
            car_id: dto.car_id.trim().to_string(),
        }
    }
}

/// Parameters for updating a car.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateCarParams {
    pub id: i32,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub location_id: Option<i32>,
    pub status: Option<CarStatus>,
    pub car_id: Option<String>,
}

impl UpdateCarParams {
    pub fn from_dto(id: i32, dto: UpdateCarDto) -> Self {
        Self {
            id,
            make: dto.make.map(|m| m.trim().to_string()),
            model: dto.model.map(|m| m.trim().to_string()),
            year: dto.year,
            location_id: dto.location,
            status: dto.status,
            car_id: dto.car_id.map(|c| c.trim().to_string()),
        }
    }
}
