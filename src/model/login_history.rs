use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct LoginHistoryDto {
    pub id: i32,
    pub user: i32,
    pub username: String,
    pub timestamp: DateTime<Utc>,
}
