use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use uuid::Uuid;

use tableside_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::{PathParams, ValidatedJson};

use super::model::{CreateRestaurantDto, CreateStaffDto, Restaurant, Staff};
use super::service::RestaurantService;

#[utoipa::path(
    post,
    path = "/api/restaurants",
    request_body = CreateRestaurantDto,
    responses(
        (status = 201, description = "Restaurant created", body = Restaurant),
        (status = 401, description = "Not signed in as an owner", body = ErrorResponse),
        (status = 409, description = "Owner already has a restaurant with this name", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Restaurants",
    security(("session_cookie" = []))
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateRestaurantDto>,
) -> Result<(StatusCode, Json<Restaurant>), AppError> {
    let restaurant =
        RestaurantService::create_restaurant(&state.db, auth_user.user_id, dto).await?;
    Ok((StatusCode::CREATED, Json(restaurant)))
}

#[utoipa::path(
    get,
    path = "/api/restaurants",
    responses(
        (status = 200, description = "Restaurants visible to the caller", body = Vec<Restaurant>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Restaurants",
    security(("session_cookie" = []))
)]
pub async fn list_restaurants(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Restaurant>>, AppError> {
    let restaurants = RestaurantService::list_restaurants(&state.db, &auth_user).await?;
    Ok(Json(restaurants))
}

#[utoipa::path(
    get,
    path = "/api/restaurants/{restaurant_id}",
    params(("restaurant_id" = Uuid, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "Restaurant details", body = Restaurant),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Restaurant not found", body = ErrorResponse)
    ),
    tag = "Restaurants",
    security(("session_cookie" = []))
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    PathParams(restaurant_id): PathParams<Uuid>,
) -> Result<Json<Restaurant>, AppError> {
    let restaurant = RestaurantService::get_restaurant(&state.db, restaurant_id).await?;
    Ok(Json(restaurant))
}

/// Register a staff member; the owner's own session cookie is left as is
#[utoipa::path(
    post,
    path = "/api/restaurants/{restaurant_id}/staff",
    params(("restaurant_id" = Uuid, Path, description = "Restaurant ID")),
    request_body = CreateStaffDto,
    responses(
        (status = 201, description = "Staff member registered", body = Staff),
        (status = 401, description = "Caller does not own the restaurant", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Restaurants",
    security(("session_cookie" = []))
)]
pub async fn register_staff(
    State(state): State<AppState>,
    auth_user: AuthUser,
    PathParams(restaurant_id): PathParams<Uuid>,
    ValidatedJson(dto): ValidatedJson<CreateStaffDto>,
) -> Result<(StatusCode, Json<Staff>), AppError> {
    let staff =
        RestaurantService::register_staff(&state.db, restaurant_id, auth_user.user_id, dto)
            .await?;
    Ok((StatusCode::CREATED, Json(staff)))
}
