use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::middleware::role::require_staff;
use crate::state::AppState;

use super::controller::{create_order, get_order, list_orders, update_order_status};

pub fn init_orders_router() -> Router<AppState> {
    Router::new()
        .route(
            "/{restaurant_id}/orders",
            post(create_order)
                .route_layer(middleware::from_fn(require_staff))
                .get(list_orders),
        )
        .route("/{restaurant_id}/orders/{order_id}", get(get_order))
        .route(
            "/{restaurant_id}/orders/{order_id}/status",
            patch(update_order_status),
        )
}
