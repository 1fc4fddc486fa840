//! Domain models for rental locations.

use crate::model::location::{CreateLocationDto, LocationDto, UpdateLocationDto};

/// Branch where cars are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub address: String,
}

impl Location {
    pub fn from_entity(entity: entity::location::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
        }
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            id: self.id,
            name: self.name,
            address: self.address,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLocationParams {
    pub name: String,
    pub address: String,
}

impl CreateLocationParams {
    pub fn from_dto(dto: CreateLocationDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            address: dto.address.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateLocationParams {
    pub id: i32,
    pub name: Option<String>,
    pub address: Option<String>,
}

impl UpdateLocationParams {
    pub fn from_dto(id: i32, dto: UpdateLocationDto) -> Self {
        Self {
            id,
            name: dto.name.map(|n| n.trim().to_string()),
            address: dto.address.map(|a| a.trim().to_string()),
        }
    }
}
