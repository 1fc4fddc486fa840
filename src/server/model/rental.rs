//! Domain models for rentals.
//!
//! A rental reserves one car for one user over the half-open interval
//! `[start_date, end_date)`. Only rentals with status `active` reserve the car.

use chrono::{DateTime, Utc};

use crate::{
    model::rental::{CreateRentalDto, RentalDto, RentalQuery, RentalStatus, UpdateRentalDto},
    server::{
        error::AppError,
        model::{
            car::Car,
            ordering::{parse_ordering, SortKey},
            user::User,
        },
        util::parse::parse_rental_status,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Rental {
    pub id: i32,
    pub user_id: i32,
    pub car_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: RentalStatus,
    /// Renting user when loaded alongside the rental.
    pub user: Option<User>,
    /// Rented car (with its location) when loaded alongside the rental.
    pub car: Option<Car>,
}

impl Rental {
    /// Converts an entity model to a rental domain model without related rows.
    ///
    /// # Returns
    /// - `Ok(Rental)` - The converted rental
    /// - `Err(AppError::InternalErr(_))` - Stored status is not recognised
    pub fn from_entity(entity: entity::rental::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            car_id: entity.car_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            status: parse_rental_status(&entity.status)?,
            user: None,
            car: None,
        })
    }

    /// Attaches loaded user and car details.
    pub fn with_details(mut self, user: Option<User>, car: Option<Car>) -> Self {
        self.user = user;
        self.car = car;
        self
    }

    pub fn into_dto(self) -> RentalDto {
        RentalDto {
            id: self.id,
            user: self.user_id,
            user_details: self.user.map(User::into_dto),
            car: self.car_id,
            car_details: self.car.map(Car::into_dto),
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
        }
    }
}

/// Which rentals a caller is allowed to see and modify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentalScope {
    /// Every rental, used for admins.
    All,
    /// Only rentals belonging to the given user ID.
    User(i32),
}

impl RentalScope {
    /// Scope for the given user: admins see everything, others their own rentals.
    pub fn for_user(user: &User) -> Self {
        if user.is_admin() {
            Self::All
        } else {
            Self::User(user.id)
        }
    }

    pub fn permits(&self, rental_user_id: i32) -> bool {
        match self {
            Self::All => true,
            Self::User(id) => *id == rental_user_id,
        }
    }
}

/// Fields rental lists can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentalSortField {
    StartDate,
    EndDate,
    Status,
}

impl RentalSortField {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "start_date" => Some(Self::StartDate),
            "end_date" => Some(Self::EndDate),
            "status" => Some(Self::Status),
            _ => None,
        }
    }
}

/// Status filter, search text and sort order for rental lists.
#[derive(Debug, Clone, Default)]
pub struct RentalFilter {
    pub status: Option<RentalStatus>,
    /// Case-insensitive substring matched against username, car ID and status.
    pub search: Option<String>,
    /// Requested order; empty means newest start date first.
    pub ordering: Vec<SortKey<RentalSortField>>,
}

impl RentalFilter {
    pub fn from_query(query: RentalQuery) -> Self {
        Self {
            status: None,
            search: query
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            ordering: query
                .ordering
                .as_deref()
                .map(|o| parse_ordering(o, RentalSortField::parse))
                .unwrap_or_default(),
        }
    }

    pub fn with_status(mut self, status: RentalStatus) -> Self {
        self.status = Some(status);
        self
    }
}

#[derive(Debug, Clone)]
pub struct CreateRentalParams {
    pub user_id: i32,
    pub car_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: RentalStatus,
}

impl CreateRentalParams {
    /// Builds creation parameters, defaulting the renting user to the caller.
    pub fn from_dto(caller_id: i32, dto: CreateRentalDto) -> Self {
        Self {
            user_id: dto.user.unwrap_or(caller_id),
            car_id: dto.car,
            start_date: dto.start_date,
            end_date: dto.end_date,
            status: dto.status,
        }
    }
}

/// Parameters for updating a rental.
///
/// All fields are optional - only provided fields will be updated. The merged
/// result is validated before anything is written.
#[derive(Debug, Clone, Default)]
pub struct UpdateRentalParams {
    pub id: i32,
    pub user_id: Option<i32>,
    pub car_id: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: Option<RentalStatus>,
}

impl UpdateRentalParams {
    pub fn from_dto(id: i32, dto: UpdateRentalDto) -> Self {
        Self {
            id,
            user_id: dto.user,
            car_id: dto.car,
            start_date: dto.start_date,
            end_date: dto.end_date,
            status: dto.status,
        }
    }
}
