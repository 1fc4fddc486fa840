use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{auth, car, dashboard, health, location, login_history, rental, user},
    error::{config::ConfigError, AppError},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Car rental API",
        description = "Fleet, rental booking and dashboard endpoints. Authentication uses a session cookie set by the login endpoint."
    ),
    tags(
        (name = "auth", description = "Login, logout and the current user"),
        (name = "health", description = "Liveness check"),
        (name = "user", description = "User administration"),
        (name = "location", description = "Rental locations"),
        (name = "car", description = "Fleet management"),
        (name = "rental", description = "Bookings with availability checks"),
        (name = "login_history", description = "Successful logins"),
        (name = "dashboard", description = "Stats, recent activity and popular cars")
    )
)]
struct ApiDoc;

/// Builds all API routes plus Swagger UI at `/api/docs`.
///
/// `routes!` groups handlers sharing one path; handlers on different paths
/// each get their own call.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(
            user::get_user,
            user::update_user,
            user::delete_user
        ))
        .routes(routes!(
            location::get_locations,
            location::create_location
        ))
        .routes(routes!(
            location::get_location,
            location::update_location,
            location::delete_location
        ))
        .routes(routes!(car::get_cars, car::create_car))
        .routes(routes!(car::get_available_cars))
        .routes(routes!(car::get_car, car::update_car, car::delete_car))
        .routes(routes!(rental::get_rentals, rental::create_rental))
        .routes(routes!(rental::get_active_rentals))
        .routes(routes!(rental::get_my_rentals))
        .routes(routes!(
            rental::get_rental,
            rental::update_rental,
            rental::delete_rental
        ))
        .routes(routes!(login_history::get_login_history))
        .routes(routes!(dashboard::get_dashboard))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
}

/// Builds the CORS layer for a configured frontend origin.
///
/// Without `CORS_ORIGIN` no cross-origin headers are sent. With it, credentials
/// are allowed so the session cookie travels with requests from that origin.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let Some(origin) = &config.cors_origin else {
        return Ok(CorsLayer::new());
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "CORS_ORIGIN".to_string(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]))
}
