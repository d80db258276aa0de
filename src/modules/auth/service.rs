use sqlx::PgPool;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use tableside_auth::create_access_token;
use tableside_config::JwtConfig;
use tableside_core::{AppError, hash_password_blocking, verify_password_blocking};
use tableside_observability::{track_identity_registered, track_sign_in, track_token_issued};

use super::model::{Credentials, Role, SessionResponse, SignInRequest, SignUpRequest};

/// A freshly issued session: the token for the cookie and the body.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub identity: SessionResponse,
}

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, jwt_config, dto), fields(owner.username = %dto.username, db.operation = "INSERT", db.table = "owners"))]
    pub async fn register_owner(
        db: &PgPool,
        jwt_config: &JwtConfig,
        dto: SignUpRequest,
    ) -> Result<IssuedSession, AppError> {
        debug!("Registering owner");

        let password_hash = hash_password_blocking(dto.password).await?;

        let (id, username) = sqlx::query_as::<_, (Uuid, String)>(
            "INSERT INTO owners (username, password_hash) VALUES ($1, $2)
             RETURNING id, username",
        )
        .bind(&dto.username)
        .bind(&password_hash)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                warn!(owner.username = %dto.username, "Username already taken");
                return AppError::conflict(anyhow::anyhow!("Username already taken"));
            }
            error!(error = %e, "Database error registering owner");
            AppError::from(e)
        })?;

        track_identity_registered(Role::Owner.as_str());
        info!(owner.id = %id, "Owner registered");

        Self::issue(jwt_config, id, username, Role::Owner)
    }

    /// Signs in an owner or staff member depending on `role`.
    ///
    /// Unknown username is `404`, wrong password `401`.
    #[instrument(skip(db, jwt_config, dto), fields(identity.role = %role, identity.username = %dto.username, db.operation = "SELECT"))]
    pub async fn sign_in(
        db: &PgPool,
        jwt_config: &JwtConfig,
        role: Role,
        dto: SignInRequest,
    ) -> Result<IssuedSession, AppError> {
        let sql = match role {
            Role::Owner => "SELECT id, username, password_hash FROM owners WHERE username = $1",
            Role::Staff => "SELECT id, username, password_hash FROM staff WHERE username = $1",
        };

        let credentials = sqlx::query_as::<_, Credentials>(sql)
            .bind(&dto.username)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| {
                debug!("Unknown username");
                track_sign_in(role.as_str(), "unknown_user");
                AppError::not_found(anyhow::anyhow!("User not found"))
            })?;

        let password_ok =
            verify_password_blocking(dto.password, credentials.password_hash.clone()).await?;

        if !password_ok {
            warn!(identity.id = %credentials.id, "Sign-in with wrong password");
            track_sign_in(role.as_str(), "bad_password");
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        track_sign_in(role.as_str(), "success");
        info!(identity.id = %credentials.id, "Signed in");

        Self::issue(jwt_config, credentials.id, credentials.username, role)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT"))]
    pub async fn current_identity(
        db: &PgPool,
        user_id: Uuid,
        role: Role,
    ) -> Result<SessionResponse, AppError> {
        let sql = match role {
            Role::Owner => "SELECT username FROM owners WHERE id = $1",
            Role::Staff => "SELECT username FROM staff WHERE id = $1",
        };

        let username = sqlx::query_scalar::<_, String>(sql)
            .bind(user_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Identity not found")))?;

        Ok(SessionResponse {
            id: user_id,
            username,
            role,
        })
    }

    fn issue(
        jwt_config: &JwtConfig,
        id: Uuid,
        username: String,
        role: Role,
    ) -> Result<IssuedSession, AppError> {
        let token = create_access_token(id, role, jwt_config)?;
        track_token_issued(role.as_str());

        Ok(IssuedSession {
            token,
            identity: SessionResponse { id, username, role },
        })
    }
}
