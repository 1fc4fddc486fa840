use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        location::{CreateLocationDto, LocationDto, UpdateLocationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::location::{CreateLocationParams, Location, UpdateLocationParams},
        service::location::LocationService,
        state::AppState,
    },
};

pub static LOCATION_TAG: &str = "location";

#[utoipa::path(
    get,
    path = "/api/locations",
    tag = LOCATION_TAG,
    responses(
        (status = 200, description = "All locations ordered by name", body = Vec<LocationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_locations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let locations = LocationService::new(&state.db).get_all().await?;
    let locations: Vec<LocationDto> = locations.into_iter().map(Location::into_dto).collect();

    Ok((StatusCode::OK, Json(locations)))
}

#[utoipa::path(
    get,
    path = "/api/locations/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location ID")),
    responses(
        (status = 200, description = "The location", body = LocationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_location(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let location = LocationService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Location not found".to_string()))?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}

/// Create a location. Admin only.
#[utoipa::path(
    post,
    path = "/api/locations",
    tag = LOCATION_TAG,
    request_body = CreateLocationDto,
    responses(
        (status = 201, description = "Location created", body = LocationDto),
        (status = 400, description = "Invalid location data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_location(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let location = LocationService::new(&state.db)
        .create(CreateLocationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(location.into_dto())))
}

/// Update a location. Admin only.
#[utoipa::path(
    put,
    path = "/api/locations/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location ID")),
    request_body = UpdateLocationDto,
    responses(
        (status = 200, description = "Location updated", body = LocationDto),
        (status = 400, description = "Invalid location data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_location(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let location = LocationService::new(&state.db)
        .update(UpdateLocationParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}

/// Delete a location and every car kept there. Admin only.
#[utoipa::path(
    delete,
    path = "/api/locations/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location ID")),
    responses(
        (status = 204, description = "Location deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_location(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    LocationService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
