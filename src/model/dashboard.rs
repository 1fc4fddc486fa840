use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{car::CarStatus, rental::RentalStatus};

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct DashboardDto {
    pub stats: DashboardStatsDto,
    pub activity: Vec<ActivityDto>,
    #[serde(rename = "popularCars")]
    pub popular_cars: Vec<PopularCarDto>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Eq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub cars: u64,
    pub available_cars: u64,
    pub rented_cars: u64,
    pub maintenance_cars: u64,
    pub rentals: u64,
    pub active_rentals: u64,
    pub completed_rentals: u64,
    pub users: u64,
}

/// One entry of the recent activity feed, tagged by `type`.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActivityDto {
    #[serde(rename_all = "camelCase")]
    Login {
        user_id: i32,
        username: String,
        timestamp: DateTime<Utc>,
    },
    #[serde(rename_all = "camelCase")]
    Rental {
        user_id: i32,
        username: String,
        /// External identifier of the rented car.
        car_id: String,
        /// `"{make} {model}"`.
        car_name: String,
        status: RentalStatus,
        timestamp: DateTime<Utc>,
    },
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PopularCarDto {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub status: CarStatus,
    pub rental_count: u64,
}

#[derive(Deserialize, IntoParams, Clone, Debug, Default)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    /// Only consider activity at or before this instant.
    pub as_of: Option<DateTime<Utc>>,
}
