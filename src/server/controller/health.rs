use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::model::api::HealthDto;

pub static HEALTH_TAG: &str = "health";

/// Liveness check. Does not require authentication.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is up", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "success".to_string(),
            message: "Car rental API is running".to_string(),
            timestamp: Utc::now(),
        }),
    )
}
