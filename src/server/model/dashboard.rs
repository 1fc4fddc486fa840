//! Domain models for the dashboard summary.

use chrono::{DateTime, Utc};

use crate::model::{
    car::CarStatus,
    dashboard::{ActivityDto, DashboardDto, DashboardStatsDto, PopularCarDto},
    rental::RentalStatus,
};

/// Entity counts shown at the top of the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub cars: u64,
    pub available_cars: u64,
    pub rented_cars: u64,
    pub maintenance_cars: u64,
    pub rentals: u64,
    pub active_rentals: u64,
    pub completed_rentals: u64,
    pub users: u64,
}

impl DashboardStats {
    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            cars: self.cars,
            available_cars: self.available_cars,
            rented_cars: self.rented_cars,
            maintenance_cars: self.maintenance_cars,
            rentals: self.rentals,
            active_rentals: self.active_rentals,
            completed_rentals: self.completed_rentals,
            users: self.users,
        }
    }
}

/// A single event in the recent activity feed.
#[derive(Debug, Clone, PartialEq)]
pub enum Activity {
    Login {
        /// Login history row ID, used as a tie-breaker.
        id: i32,
        user_id: i32,
        username: String,
        timestamp: DateTime<Utc>,
    },
    Rental {
        /// Rental row ID, used as a tie-breaker.
        id: i32,
        user_id: i32,
        username: String,
        car_id: String,
        car_name: String,
        status: RentalStatus,
        /// Rental start date.
        timestamp: DateTime<Utc>,
    },
}

impl Activity {
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Login { timestamp, .. } | Self::Rental { timestamp, .. } => *timestamp,
        }
    }

    /// Ordering key within a single timestamp: logins sort before rentals,
    /// then higher IDs first.
    pub(crate) fn tie_break(&self) -> (u8, std::cmp::Reverse<i32>) {
        match self {
            Self::Login { id, .. } => (0, std::cmp::Reverse(*id)),
            Self::Rental { id, .. } => (1, std::cmp::Reverse(*id)),
        }
    }

    pub fn into_dto(self) -> ActivityDto {
        match self {
            Self::Login {
                user_id,
                username,
                timestamp,
                ..
            } => ActivityDto::Login {
                user_id,
                username,
                timestamp,
            },
            Self::Rental {
                user_id,
                username,
                car_id,
                car_name,
                status,
                timestamp,
                ..
            } => ActivityDto::Rental {
                user_id,
                username,
                car_id,
                car_name,
                status,
                timestamp,
            },
        }
    }
}

/// A car together with how many rentals reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct PopularCar {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub status: CarStatus,
    pub rental_count: u64,
}

impl PopularCar {
    pub fn into_dto(self) -> PopularCarDto {
        PopularCarDto {
            id: self.id,
            make: self.make,
            model: self.model,
            year: self.year,
            status: self.status,
            rental_count: self.rental_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub activity: Vec<Activity>,
    pub popular_cars: Vec<PopularCar>,
}

impl Dashboard {
    pub fn into_dto(self) -> DashboardDto {
        DashboardDto {
            stats: self.stats.into_dto(),
            activity: self.activity.into_iter().map(Activity::into_dto).collect(),
            popular_cars: self
                .popular_cars
                .into_iter()
                .map(PopularCar::into_dto)
                .collect(),
        }
    }
}
