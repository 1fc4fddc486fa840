use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, login_history::LoginHistoryDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::login_history::LoginEntry,
        service::login_history::LoginHistoryService, state::AppState,
    },
};

pub static LOGIN_HISTORY_TAG: &str = "login_history";

/// Get login history, newest first. Admins see every login, other users their own.
#[utoipa::path(
    get,
    path = "/api/login-history",
    tag = LOGIN_HISTORY_TAG,
    responses(
        (status = 200, description = "Login history", body = Vec<LoginHistoryDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_login_history(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user_filter = if user.is_admin() { None } else { Some(user.id) };
    let entries = LoginHistoryService::new(&state.db)
        .get_all(user_filter)
        .await?;
    let entries: Vec<LoginHistoryDto> = entries.into_iter().map(LoginEntry::into_dto).collect();

    Ok((StatusCode::OK, Json(entries)))
}
