use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct LocationDto {
    pub id: i32,
    pub name: String,
    pub address: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateLocationDto {
    pub name: String,
    pub address: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdateLocationDto {
    pub name: Option<String>,
    pub address: Option<String>,
}
