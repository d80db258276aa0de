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

use super::model::{CreateOrderDto, Order, OrderWithItems, UpdateOrderStatusDto};
use super::service::OrderService;

/// Place a table order (staff of the restaurant only)
#[utoipa::path(
    post,
    path = "/api/restaurants/{restaurant_id}/orders",
    params(("restaurant_id" = Uuid, Path, description = "Restaurant ID")),
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order created with server-computed total", body = OrderWithItems),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 401, description = "Caller is not staff of the restaurant", body = ErrorResponse),
        (status = 404, description = "A product is not in the restaurant's catalog", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Orders",
    security(("session_cookie" = []))
)]
pub async fn create_order(
    State(state): State<AppState>,
    auth_user: AuthUser,
    PathParams(restaurant_id): PathParams<Uuid>,
    ValidatedJson(dto): ValidatedJson<CreateOrderDto>,
) -> Result<(StatusCode, Json<OrderWithItems>), AppError> {
    let order =
        OrderService::create_order(&state.db, restaurant_id, auth_user.user_id, dto).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

#[utoipa::path(
    get,
    path = "/api/restaurants/{restaurant_id}/orders",
    params(("restaurant_id" = Uuid, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "Orders, newest first", body = Vec<Order>),
        (status = 401, description = "Caller is neither owner nor staff of the restaurant", body = ErrorResponse)
    ),
    tag = "Orders",
    security(("session_cookie" = []))
)]
pub async fn list_orders(
    State(state): State<AppState>,
    auth_user: AuthUser,
    PathParams(restaurant_id): PathParams<Uuid>,
) -> Result<Json<Vec<Order>>, AppError> {
    let orders = OrderService::list_orders(&state.db, restaurant_id, &auth_user).await?;
    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/api/restaurants/{restaurant_id}/orders/{order_id}",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
        ("order_id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order with line items", body = OrderWithItems),
        (status = 401, description = "Caller is neither owner nor staff of the restaurant", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    tag = "Orders",
    security(("session_cookie" = []))
)]
pub async fn get_order(
    State(state): State<AppState>,
    auth_user: AuthUser,
    PathParams((restaurant_id, order_id)): PathParams<(Uuid, Uuid)>,
) -> Result<Json<OrderWithItems>, AppError> {
    let order = OrderService::get_order(&state.db, restaurant_id, order_id, &auth_user).await?;
    Ok(Json(order))
}

#[utoipa::path(
    patch,
    path = "/api/restaurants/{restaurant_id}/orders/{order_id}/status",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
        ("order_id" = Uuid, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Order moved to the new status", body = Order),
        (status = 401, description = "Caller is neither owner nor staff of the restaurant", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 409, description = "Transition not allowed from the current status", body = ErrorResponse)
    ),
    tag = "Orders",
    security(("session_cookie" = []))
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    auth_user: AuthUser,
    PathParams((restaurant_id, order_id)): PathParams<(Uuid, Uuid)>,
    ValidatedJson(dto): ValidatedJson<UpdateOrderStatusDto>,
) -> Result<Json<Order>, AppError> {
    let order =
        OrderService::update_status(&state.db, restaurant_id, order_id, &auth_user, dto).await?;
    Ok(Json(order))
}
