use axum::{Router, middleware, routing::post};

use crate::middleware::role::require_owner;
use crate::state::AppState;

use super::controller::{create_product, list_products};

pub fn init_products_router() -> Router<AppState> {
    Router::new().route(
        "/{restaurant_id}/products",
        post(create_product)
            .route_layer(middleware::from_fn(require_owner))
            .get(list_products),
    )
}
