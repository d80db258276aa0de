use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use tracing::instrument;
use utoipa::ToSchema;

use tableside_config::JwtConfig;
use tableside_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{Role, SessionResponse, SignInRequest, SignUpRequest};
use super::service::{AuthService, IssuedSession};

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// HTTP-only session cookie carrying `token`.
pub fn session_cookie(jwt_config: &JwtConfig, token: String) -> Cookie<'static> {
    Cookie::build((jwt_config.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(jwt_config.cookie_secure)
        .build()
}

fn with_session(
    jar: CookieJar,
    jwt_config: &JwtConfig,
    session: IssuedSession,
) -> (CookieJar, Json<SessionResponse>) {
    let jar = jar.add(session_cookie(jwt_config, session.token));
    (jar, Json(session.identity))
}

/// Register a restaurant owner
#[utoipa::path(
    post,
    path = "/api/auth/owners/sign-up",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "Owner registered, session cookie set", body = SessionResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, dto))]
pub async fn sign_up_owner(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<SignUpRequest>,
) -> Result<(StatusCode, CookieJar, Json<SessionResponse>), AppError> {
    let session = AuthService::register_owner(&state.db, &state.jwt_config, dto).await?;
    let (jar, body) = with_session(jar, &state.jwt_config, session);
    Ok((StatusCode::CREATED, jar, body))
}

/// Sign in as a restaurant owner
#[utoipa::path(
    post,
    path = "/api/auth/owners/sign-in",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in, session cookie set", body = SessionResponse),
        (status = 401, description = "Wrong password", body = ErrorResponse),
        (status = 404, description = "Unknown username", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, dto))]
pub async fn sign_in_owner(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<SignInRequest>,
) -> Result<(CookieJar, Json<SessionResponse>), AppError> {
    let session = AuthService::sign_in(&state.db, &state.jwt_config, Role::Owner, dto).await?;
    Ok(with_session(jar, &state.jwt_config, session))
}

/// Sign in as a staff member
#[utoipa::path(
    post,
    path = "/api/auth/staff/sign-in",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in, session cookie set", body = SessionResponse),
        (status = 401, description = "Wrong password", body = ErrorResponse),
        (status = 404, description = "Unknown username", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, dto))]
pub async fn sign_in_staff(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<SignInRequest>,
) -> Result<(CookieJar, Json<SessionResponse>), AppError> {
    let session = AuthService::sign_in(&state.db, &state.jwt_config, Role::Staff, dto).await?;
    Ok(with_session(jar, &state.jwt_config, session))
}

/// Identity behind the current session
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current identity", body = SessionResponse),
        (status = 400, description = "Expired or malformed session", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 404, description = "Identity no longer exists", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("session_cookie" = []))
)]
#[instrument(skip(state))]
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<SessionResponse>, AppError> {
    let identity =
        AuthService::current_identity(&state.db, auth_user.user_id, auth_user.role).await?;
    Ok(Json(identity))
}
