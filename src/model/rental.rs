use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{car::CarDto, user::UserDto};

/// Lifecycle state of a rental. Only active rentals block a car.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Eq, Clone, Copy, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

impl RentalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct RentalDto {
    pub id: i32,
    /// ID of the renting user.
    pub user: i32,
    pub user_details: Option<UserDto>,
    /// ID of the rented car.
    pub car: i32,
    pub car_details: Option<CarDto>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: RentalStatus,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateRentalDto {
    /// Defaults to the authenticated user when omitted.
    pub user: Option<i32>,
    pub car: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub status: RentalStatus,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdateRentalDto {
    pub user: Option<i32>,
    pub car: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: Option<RentalStatus>,
}

/// Search and sort options for rental lists.
#[derive(Deserialize, IntoParams, Clone, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct RentalQuery {
    /// Case-insensitive substring matched against the renter's username, the car ID and the status.
    pub search: Option<String>,
    /// Comma-separated sort fields out of `start_date`, `end_date` and `status`;
    /// prefix a field with `-` to sort descending.
    pub ordering: Option<String>,
}
