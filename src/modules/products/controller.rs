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

use super::model::{CreateProductDto, Product};
use super::service::ProductService;

#[utoipa::path(
    post,
    path = "/api/restaurants/{restaurant_id}/products",
    params(("restaurant_id" = Uuid, Path, description = "Restaurant ID")),
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 401, description = "Caller does not own the restaurant", body = ErrorResponse),
        (status = 409, description = "Duplicate product title", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Products",
    security(("session_cookie" = []))
)]
pub async fn create_product(
    State(state): State<AppState>,
    auth_user: AuthUser,
    PathParams(restaurant_id): PathParams<Uuid>,
    ValidatedJson(dto): ValidatedJson<CreateProductDto>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let product =
        ProductService::create_product(&state.db, restaurant_id, auth_user.user_id, dto).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    get,
    path = "/api/restaurants/{restaurant_id}/products",
    params(("restaurant_id" = Uuid, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "Restaurant catalog", body = Vec<Product>),
        (status = 401, description = "Caller is neither owner nor staff of the restaurant", body = ErrorResponse)
    ),
    tag = "Products",
    security(("session_cookie" = []))
)]
pub async fn list_products(
    State(state): State<AppState>,
    auth_user: AuthUser,
    PathParams(restaurant_id): PathParams<Uuid>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = ProductService::list_products(&state.db, restaurant_id, &auth_user).await?;
    Ok(Json(products))
}
