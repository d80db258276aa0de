//! Role checks.
//!
//! Role failures answer `401` like every other authorization failure in
//! this API.
//!
//! Whole route groups can be restricted with [`require_owner`] /
//! [`require_staff`] as route layers inside a group already guarded by
//! `require_auth`:
//!
//! ```rust,ignore
//! Router::new()
//!     .route("/{restaurant_id}/staff", post(register_staff))
//!     .route_layer(middleware::from_fn(require_owner))
//! ```
//!
//! Handlers serving several roles on one path call [`check_role`] instead.

use axum::{extract::Request, middleware::Next, response::Response};

use tableside_auth::Role;
use tableside_core::AppError;
use tableside_observability::track_authorization_denied;

use crate::middleware::auth::AuthUser;

/// Fails with `401` unless `auth_user` has one of `allowed`.
pub fn check_role(auth_user: &AuthUser, allowed: &[Role]) -> Result<(), AppError> {
    if allowed.contains(&auth_user.role) {
        return Ok(());
    }

    track_authorization_denied("role");
    let expected = allowed
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(" or ");
    Err(AppError::unauthorized(format!(
        "This operation requires the {expected} role"
    )))
}

async fn require_roles(req: Request, next: Next, allowed: &[Role]) -> Result<Response, AppError> {
    let auth_user = req
        .extensions()
        .get::<AuthUser>()
        .copied()
        .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

    check_role(&auth_user, allowed)?;

    Ok(next.run(req).await)
}

pub async fn require_owner(req: Request, next: Next) -> Result<Response, AppError> {
    require_roles(req, next, &[Role::Owner]).await
}

pub async fn require_staff(req: Request, next: Next) -> Result<Response, AppError> {
    require_roles(req, next, &[Role::Staff]).await
}
