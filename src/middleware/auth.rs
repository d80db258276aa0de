use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use tracing::debug;
use uuid::Uuid;

use tableside_auth::{Claims, Role, TokenError, verify_token};
use tableside_core::AppError;
use tableside_observability::track_token_rejected;

use crate::state::AppState;

/// Identity of a request that passed [`require_auth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: Role,
}

impl AuthUser {
    pub fn is_owner(&self) -> bool {
        self.role == Role::Owner
    }

    pub fn is_staff(&self) -> bool {
        self.role == Role::Staff
    }
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            role: claims.role,
        }
    }
}

/// Session guard for protected route groups.
///
/// | Condition | Status |
/// |---|---|
/// | no (or empty) session cookie | 401 |
/// | signature mismatch or non-HS256 token | 401 |
/// | expired or malformed token | 400 |
/// | nil subject | 401 |
///
/// On success the caller's [`AuthUser`] is inserted into the request
/// extensions. No database access.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = jar
        .get(&state.jwt_config.cookie_name)
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            track_token_rejected("missing");
            AppError::unauthorized("Missing session cookie")
        })?;

    let claims = verify_token(token, &state.jwt_config).map_err(|e| {
        debug!(error = %e, "Session token rejected");
        match e {
            TokenError::SignatureInvalid => {
                track_token_rejected("signature");
                AppError::unauthorized("Invalid session token")
            }
            TokenError::Expired => {
                track_token_rejected("expired");
                AppError::bad_request(anyhow::anyhow!("Session token has expired"))
            }
            TokenError::Malformed(_) | TokenError::Encoding(_) => {
                track_token_rejected("malformed");
                AppError::bad_request(anyhow::anyhow!("Malformed session token"))
            }
        }
    })?;

    if claims.sub.is_nil() {
        track_token_rejected("nil_subject");
        return Err(AppError::unauthorized("Invalid session subject"));
    }

    req.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .copied()
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}
