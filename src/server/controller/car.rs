use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        car::{CarDto, CarQuery, CreateCarDto, PaginatedCarsDto, UpdateCarDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::car::{Car, CarFilter, CreateCarParams, UpdateCarParams},
        service::car::CarService,
        state::AppState,
    },
};

/// Tag for grouping car endpoints in OpenAPI documentation
pub static CAR_TAG: &str = "car";

/// Get a filtered, paginated list of cars.
///
/// # Query Parameters
/// - `search` - Substring of make, model, year, car ID or status
/// - `status` - Only cars with this status
/// - `ordering` - Sort fields, e.g. `-year,make`; defaults to make then model
/// - `page` / `per_page` - Page selection; `per_page` is capped at 100
#[utoipa::path(
    get,
    path = "/api/cars",
    tag = CAR_TAG,
    params(CarQuery),
    responses(
        (status = 200, description = "Page of cars", body = PaginatedCarsDto),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cars(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CarQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let cars = CarService::new(&state.db)
        .get_filtered(CarFilter::from_query(query))
        .await?;

    Ok((StatusCode::OK, Json(cars.into_dto())))
}

/// Get every car whose status is `available`.
#[utoipa::path(
    get,
    path = "/api/cars/available",
    tag = CAR_TAG,
    responses(
        (status = 200, description = "Available cars", body = Vec<CarDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_cars(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let cars = CarService::new(&state.db).get_available().await?;
    let cars: Vec<CarDto> = cars.into_iter().map(Car::into_dto).collect();

    Ok((StatusCode::OK, Json(cars)))
}

#[utoipa::path(
    get,
    path = "/api/cars/{id}",
    tag = CAR_TAG,
    params(("id" = i32, Path, description = "Car ID")),
    responses(
        (status = 200, description = "The car", body = CarDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_car(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let car = CarService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

    Ok((StatusCode::OK, Json(car.into_dto())))
}

/// Add a car to the fleet.
///
/// # Access Control
/// - `Admin` - Only admins can create cars
///
/// # Returns
/// - `201 Created` - The new car with its location
/// - `400 Bad Request` - Missing field, invalid year or unknown location
/// - `409 Conflict` - Car ID already in use
#[utoipa::path(
    post,
    path = "/api/cars",
    tag = CAR_TAG,
    request_body = CreateCarDto,
    responses(
        (status = 201, description = "Car created", body = CarDto),
        (status = 400, description = "Invalid car data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Car ID already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_car(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let car = CarService::new(&state.db)
        .create(CreateCarParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(car.into_dto())))
}

/// Update a car. Admin only.
#[utoipa::path(
    put,
    path = "/api/cars/{id}",
    tag = CAR_TAG,
    params(("id" = i32, Path, description = "Car ID")),
    request_body = UpdateCarDto,
    responses(
        (status = 200, description = "Car updated", body = CarDto),
        (status = 400, description = "Invalid car data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 409, description = "Car ID already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_car(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let car = CarService::new(&state.db)
        .update(UpdateCarParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(car.into_dto())))
}

/// Delete a car and its rentals. Admin only.
#[utoipa::path(
    delete,
    path = "/api/cars/{id}",
    tag = CAR_TAG,
    params(("id" = i32, Path, description = "Car ID")),
    responses(
        (status = 204, description = "Car deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_car(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    CarService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
