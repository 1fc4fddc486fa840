use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    ///
    /// The request was made without logging in or after the session expired.
    /// Results in a 401 Unauthorized response.
    #[error("No user ID found in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The session user has been deactivated by an administrator.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} is inactive")]
    InactiveUser(i32),

    /// The authenticated user lacks a required permission.
    ///
    /// The second field describes the attempted action and is only logged.
    /// Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login request is missing the username or password.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Login request missing username or password")]
    MissingCredentials,

    /// Unknown username, wrong password or inactive account at login.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid login credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` / `InactiveUser` → 401 with "Authentication required"
/// - `InvalidCredentials` → 401 with "Invalid credentials"
/// - `MissingCredentials` → 400 with "Please provide both username and password"
/// - `AccessDenied` → 403 with a generic permission message
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) | Self::InactiveUser(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::MissingCredentials => (
                StatusCode::BAD_REQUEST,
                "Please provide both username and password",
            ),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
