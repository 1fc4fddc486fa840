use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Page selection shared by list endpoints.
#[derive(Deserialize, IntoParams, Debug, Clone, Copy)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Zero-indexed page number.
    #[serde(default)]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    25
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: default_per_page(),
        }
    }
}
