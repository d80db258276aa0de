use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::role::require_owner;
use crate::modules::orders::router::init_orders_router;
use crate::modules::products::router::init_products_router;
use crate::state::AppState;

use super::controller::{create_restaurant, get_restaurant, list_restaurants, register_staff};

/// Everything under `/restaurants`. Expects `require_auth` to be layered
/// on by the caller.
pub fn init_restaurants_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            // route_layer here wraps POST only
            post(create_restaurant)
                .route_layer(middleware::from_fn(require_owner))
                .get(list_restaurants),
        )
        .route("/{restaurant_id}", get(get_restaurant))
        .route(
            "/{restaurant_id}/staff",
            post(register_staff).route_layer(middleware::from_fn(require_owner)),
        )
        .merge(init_products_router())
        .merge(init_orders_router())
}
