use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::location::LocationDto;

/// Operational state of a car in the fleet.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Eq, Clone, Copy, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum CarStatus {
    #[default]
    Available,
    Rented,
    Maintenance,
}

impl CarStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Rented => "rented",
            Self::Maintenance => "maintenance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(Self::Available),
            "rented" => Some(Self::Rented),
            "maintenance" => Some(Self::Maintenance),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct CarDto {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    /// ID of the location the car belongs to.
    pub location: i32,
    pub location_details: Option<LocationDto>,
    pub status: CarStatus,
    /// External fleet identifier.
    pub car_id: String,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct PaginatedCarsDto {
    pub cars: Vec<CarDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateCarDto {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub location: i32,
    #[serde(default)]
    pub status: CarStatus,
    pub car_id: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdateCarDto {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub location: Option<i32>,
    pub status: Option<CarStatus>,
    pub car_id: Option<String>,
}

/// Query filters for the car list.
#[derive(Deserialize, IntoParams, Clone, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct CarQuery {
    /// Case-insensitive substring matched against make, model, year, car ID and status.
    pub search: Option<String>,
    pub status: Option<CarStatus>,
    /// Comma-separated sort fields out of `make`, `model`, `year` and `status`;
    /// prefix a field with `-` to sort descending.
    pub ordering: Option<String>,
    #[serde(default)]
    pub page: u64,
    pub per_page: Option<u64>,
}
