use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        dashboard::{DashboardDto, DashboardQuery},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::dashboard::DashboardService,
        state::AppState,
    },
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Get dashboard stats, recent activity and the most rented cars.
///
/// # Query Parameters
/// - `asOf` - Only include activity at or before this RFC 3339 instant
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = DASHBOARD_TAG,
    params(DashboardQuery),
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let dashboard = DashboardService::new(&state.db)
        .compute(query.as_of)
        .await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}
