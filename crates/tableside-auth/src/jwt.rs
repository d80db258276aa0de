//! HS256 token signing and verification.
//!
//! Only HS256 is accepted on the way in; a token whose header names any
//! other algorithm is treated like a bad signature. Expiry is checked with
//! zero leeway since the same process issues and verifies.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use tableside_config::JwtConfig;

use crate::claims::{Claims, Role};

const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token signature is invalid")]
    SignatureInvalid,
    #[error("token has expired")]
    Expired,
    #[error("token is malformed: {0}")]
    Malformed(String),
    #[error("failed to sign token: {0}")]
    Encoding(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                TokenError::SignatureInvalid
            }
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed(err.to_string()),
        }
    }
}

fn validation() -> Validation {
    let mut validation = Validation::new(ALGORITHM);
    validation.leeway = 0;
    validation
}

/// Issues a session token for `user_id` valid for
/// `jwt_config.access_token_expiry` seconds.
///
/// # Errors
///
/// [`TokenError::Encoding`] if signing fails.
pub fn create_access_token(
    user_id: Uuid,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, TokenError> {
    let claims = Claims::new(user_id, role, jwt_config.access_token_expiry);
    sign_claims(&claims, jwt_config)
}

/// Signs an explicit claim set with the current secret.
pub fn sign_claims(claims: &Claims, jwt_config: &JwtConfig) -> Result<String, TokenError> {
    encode(
        &Header::new(ALGORITHM),
        claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| TokenError::Encoding(e.to_string()))
}

/// Verifies `token` and returns its claims.
///
/// The current secret is tried first, then each previous secret. Only a
/// signature mismatch moves on to the next secret; any other failure is
/// final.
///
/// # Errors
///
/// - [`TokenError::SignatureInvalid`]: no secret matches, or the algorithm is not HS256
/// - [`TokenError::Expired`]: `exp` is in the past
/// - [`TokenError::Malformed`]: anything else
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    if header_algorithm(token).is_some_and(|alg| alg != "HS256") {
        return Err(TokenError::SignatureInvalid);
    }

    let validation = validation();

    for secret in jwt_config.verification_secrets() {
        match decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        ) {
            Ok(data) => return Ok(data.claims),
            Err(e) if matches!(e.kind(), ErrorKind::InvalidSignature) => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Err(TokenError::SignatureInvalid)
}

#[derive(Deserialize)]
struct RawHeader {
    alg: Option<String>,
}

/// The `alg` named in the header, read without going through
/// [`Algorithm`], which cannot represent `none` or unknown names.
fn header_algorithm(token: &str) -> Option<String> {
    let segment = token.split('.').next()?;
    let bytes = URL_SAFE_NO_PAD.decode(segment).ok()?;
    serde_json::from_slice::<RawHeader>(&bytes).ok()?.alg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig::new("test-secret-key-at-least-32-characters-long")
    }

    #[test]
    fn test_issue_then_verify_returns_same_claims() {
        let config = get_test_jwt_config();
        let claims = Claims::new(Uuid::new_v4(), Role::Owner, 3600);

        let token = sign_claims(&claims, &config).unwrap();
        let verified = verify_token(&token, &config).unwrap();

        assert_eq!(verified, claims);
    }

    #[test]
    fn test_create_access_token_uses_configured_window() {
        let mut config = get_test_jwt_config();
        config.access_token_expiry = 120;
        let user_id = Uuid::new_v4();

        let token = create_access_token(user_id, Role::Staff, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.role, Role::Staff);
        assert_eq!(claims.exp - claims.iat, 120);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let mut config = get_test_jwt_config();
        config.access_token_expiry = -60;

        let token = create_access_token(Uuid::new_v4(), Role::Owner, &config).unwrap();

        assert_eq!(verify_token(&token, &config), Err(TokenError::Expired));
    }

    #[test]
    fn test_wrong_secret_is_signature_invalid() {
        let config = get_test_jwt_config();
        let token = create_access_token(Uuid::new_v4(), Role::Owner, &config).unwrap();

        let other = JwtConfig::new("different-secret-key-at-least-32-characters");

        assert_eq!(verify_token(&token, &other), Err(TokenError::SignatureInvalid));
    }

    #[test]
    fn test_other_algorithm_is_signature_invalid() {
        let config = get_test_jwt_config();
        let claims = Claims::new(Uuid::new_v4(), Role::Owner, 3600);
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert_eq!(verify_token(&token, &config), Err(TokenError::SignatureInvalid));
    }

    fn unsigned_token(alg: &str, claims: &Claims) -> String {
        let header = URL_SAFE_NO_PAD.encode(format!(r#"{{"alg":"{alg}","typ":"JWT"}}"#));
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims).unwrap());
        format!("{header}.{payload}.")
    }

    #[test]
    fn test_unsupported_algorithm_names_are_signature_invalid() {
        let config = get_test_jwt_config();
        let claims = Claims::new(Uuid::new_v4(), Role::Owner, 3600);

        for alg in ["none", "None", "HS999"] {
            let token = unsigned_token(alg, &claims);
            assert_eq!(
                verify_token(&token, &config),
                Err(TokenError::SignatureInvalid),
                "alg {alg}"
            );
        }
    }

    #[test]
    fn test_garbage_is_malformed() {
        let config = get_test_jwt_config();
        assert!(matches!(
            verify_token("invalid-token", &config),
            Err(TokenError::Malformed(_))
        ));
        assert!(matches!(
            verify_token("", &config),
            Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn test_rotated_secret_still_verifies() {
        let old = JwtConfig::new("old-secret-key-at-least-32-characters-long");
        let token = create_access_token(Uuid::new_v4(), Role::Staff, &old).unwrap();

        let rotated = JwtConfig::new("new-secret-key-at-least-32-characters-long")
            .with_previous_secrets(vec![old.secret.clone()]);

        assert!(verify_token(&token, &rotated).is_ok());
    }

    #[test]
    fn test_new_tokens_use_current_secret() {
        let rotated = JwtConfig::new("new-secret-key-at-least-32-characters-long")
            .with_previous_secrets(vec!["old-secret-key-at-least-32-characters-long".to_string()]);
        let token = create_access_token(Uuid::new_v4(), Role::Owner, &rotated).unwrap();

        let current_only = JwtConfig::new("new-secret-key-at-least-32-characters-long");

        assert!(verify_token(&token, &current_only).is_ok());
    }
}
