use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::health_check;

pub fn init_health_router() -> Router<AppState> {
    Router::new().route("/_health", get(health_check))
}
