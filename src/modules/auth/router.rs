use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::auth::require_auth;
use crate::state::AppState;

use super::controller::{me, sign_in_owner, sign_in_staff, sign_up_owner};

pub fn init_auth_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .route("/owners/sign-up", post(sign_up_owner))
        .route("/owners/sign-in", post(sign_in_owner))
        .route("/staff/sign-in", post(sign_in_staff))
}
