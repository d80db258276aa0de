use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

use tableside::tableside_auth::{
    Claims, Role, TokenError, create_access_token, sign_claims, verify_token,
};
use tableside::tableside_config::JwtConfig;

const SECRET: &str = "unit-test-secret-that-is-long-enough-to-use";

fn config() -> JwtConfig {
    JwtConfig::new(SECRET)
}

#[test]
fn test_issue_then_verify_returns_identical_claims() {
    let claims = Claims::new(Uuid::new_v4(), Role::Staff, 3600);
    let token = sign_claims(&claims, &config()).unwrap();

    let verified = verify_token(&token, &config()).unwrap();

    assert_eq!(verified, claims);
}

#[test]
fn test_access_token_lifetime_follows_config() {
    let mut config = config();
    config.access_token_expiry = 120;
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, Role::Owner, &config).unwrap();
    let claims = verify_token(&token, &config).unwrap();

    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.role, Role::Owner);
    assert_eq!(claims.exp - claims.iat, 120);
}

#[test]
fn test_expired_token_is_never_valid() {
    let claims = Claims::new(Uuid::new_v4(), Role::Owner, -1);
    let token = sign_claims(&claims, &config()).unwrap();

    assert_eq!(verify_token(&token, &config()), Err(TokenError::Expired));
}

#[test]
fn test_token_from_other_key_is_signature_invalid() {
    let other = JwtConfig::new("a-completely-different-secret-for-tests");
    let token = create_access_token(Uuid::new_v4(), Role::Owner, &other).unwrap();

    assert_eq!(
        verify_token(&token, &config()),
        Err(TokenError::SignatureInvalid)
    );
}

#[test]
fn test_other_algorithm_is_signature_invalid() {
    let claims = Claims::new(Uuid::new_v4(), Role::Owner, 3600);
    let token = encode(
        &Header::new(Algorithm::HS384),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    assert_eq!(
        verify_token(&token, &config()),
        Err(TokenError::SignatureInvalid)
    );
}

#[test]
fn test_rotated_secret_still_verifies() {
    let old = JwtConfig::new("the-secret-we-used-before-rotation-xx");
    let token = create_access_token(Uuid::new_v4(), Role::Staff, &old).unwrap();

    let rotated = config().with_previous_secrets(vec![old.secret.clone()]);

    assert!(verify_token(&token, &rotated).is_ok());
    assert_eq!(
        verify_token(&token, &config()),
        Err(TokenError::SignatureInvalid)
    );
}

#[test]
fn test_truncated_token_is_malformed() {
    let token = create_access_token(Uuid::new_v4(), Role::Owner, &config()).unwrap();
    let truncated = &token[..token.len() / 2];

    assert!(matches!(
        verify_token(truncated, &config()),
        Err(TokenError::Malformed(_) | TokenError::SignatureInvalid)
    ));
}
