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
        rental::{CreateRentalDto, RentalDto, RentalQuery, RentalStatus, UpdateRentalDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::rental::{
            CreateRentalParams, Rental, RentalFilter, RentalScope, UpdateRentalParams,
        },
        service::rental::RentalService,
        state::AppState,
    },
};

/// Tag for grouping rental endpoints in OpenAPI documentation
pub static RENTAL_TAG: &str = "rental";

/// Get rentals visible to the caller.
///
/// # Access Control
/// - Admins see every rental
/// - Other users see only their own rentals
///
/// # Query Parameters
/// - `search` - Substring of the renter's username, the car ID or the status
/// - `ordering` - Sort fields, e.g. `-end_date,status`; defaults to newest start date first
#[utoipa::path(
    get,
    path = "/api/rentals",
    tag = RENTAL_TAG,
    params(RentalQuery),
    responses(
        (status = 200, description = "Matching rentals", body = Vec<RentalDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rentals(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RentalQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rentals = RentalService::new(&state.db)
        .get_all(RentalScope::for_user(&user), &RentalFilter::from_query(query))
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(rentals))))
}

/// Get active rentals visible to the caller.
#[utoipa::path(
    get,
    path = "/api/rentals/active",
    tag = RENTAL_TAG,
    params(RentalQuery),
    responses(
        (status = 200, description = "Active rentals", body = Vec<RentalDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_rentals(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RentalQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let filter = RentalFilter::from_query(query).with_status(RentalStatus::Active);
    let rentals = RentalService::new(&state.db)
        .get_all(RentalScope::for_user(&user), &filter)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(rentals))))
}

/// Get the caller's own rentals, regardless of role.
#[utoipa::path(
    get,
    path = "/api/rentals/mine",
    tag = RENTAL_TAG,
    params(RentalQuery),
    responses(
        (status = 200, description = "The caller's rentals", body = Vec<RentalDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_rentals(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RentalQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rentals = RentalService::new(&state.db)
        .get_all(RentalScope::User(user.id), &RentalFilter::from_query(query))
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(rentals))))
}

/// Get a single rental. Rentals of other users are reported as not found
/// unless the caller is an admin.
#[utoipa::path(
    get,
    path = "/api/rentals/{id}",
    tag = RENTAL_TAG,
    params(("id" = i32, Path, description = "Rental ID")),
    responses(
        (status = 200, description = "The rental", body = RentalDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Rental not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rental(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rental = RentalService::new(&state.db)
        .get_by_id(id, RentalScope::for_user(&user))
        .await?
        .ok_or_else(|| AppError::NotFound("Rental not found".to_string()))?;

    Ok((StatusCode::OK, Json(rental.into_dto())))
}

/// Book a car.
///
/// The renting user defaults to the caller. Only admins may book for someone else.
/// The availability check and insert run in one transaction.
///
/// # Returns
/// - `201 Created` - The new rental
/// - `400 Bad Request` - End not after start, unknown car or unknown user
/// - `403 Forbidden` - A non-admin named another user
/// - `409 Conflict` - The car is booked for an overlapping period
#[utoipa::path(
    post,
    path = "/api/rentals",
    tag = RENTAL_TAG,
    request_body = CreateRentalDto,
    responses(
        (status = 201, description = "Rental created", body = RentalDto),
        (status = 400, description = "Invalid rental data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Cannot create rentals for other users", body = ErrorDto),
        (status = 409, description = "Car not available for the selected dates", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_rental(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRentalDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rental = RentalService::new(&state.db)
        .create(CreateRentalParams::from_dto(user.id, payload), &user)
        .await?;

    Ok((StatusCode::CREATED, Json(rental.into_dto())))
}

/// Partially update a rental.
///
/// Dates, car and status are merged with the stored rental and re-validated.
/// An active result is re-checked for availability with the rental itself excluded.
#[utoipa::path(
    put,
    path = "/api/rentals/{id}",
    tag = RENTAL_TAG,
    params(("id" = i32, Path, description = "Rental ID")),
    request_body = UpdateRentalDto,
    responses(
        (status = 200, description = "Rental updated", body = RentalDto),
        (status = 400, description = "Invalid rental data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Cannot assign rentals to other users", body = ErrorDto),
        (status = 404, description = "Rental not found", body = ErrorDto),
        (status = 409, description = "Car not available for the selected dates", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_rental(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRentalDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rental = RentalService::new(&state.db)
        .update(UpdateRentalParams::from_dto(id, payload), &user)
        .await?;

    Ok((StatusCode::OK, Json(rental.into_dto())))
}

/// Delete a rental owned by the caller, or any rental for admins.
#[utoipa::path(
    delete,
    path = "/api/rentals/{id}",
    tag = RENTAL_TAG,
    params(("id" = i32, Path, description = "Rental ID")),
    responses(
        (status = 204, description = "Rental deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Rental not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_rental(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    RentalService::new(&state.db).delete(id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn into_dtos(rentals: Vec<Rental>) -> Vec<RentalDto> {
    rentals.into_iter().map(Rental::into_dto).collect()
}
