//! Authentication payloads.
//!
//! Owners and staff live in separate tables but share the same sign-in
//! shape; the [`Role`] in the session says which table the id belongs to.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

pub use tableside_auth::Role;

/// Owner registration.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SignUpRequest {
    #[validate(length(min = 3, max = 64))]
    #[schema(example = "senku")]
    pub username: String,
    #[validate(length(min = 8, max = 128))]
    #[schema(example = "strongpassword")]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SignInRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    #[schema(example = "strongpassword")]
    pub password: String,
}

/// Body returned alongside the session cookie.
///
/// The token itself only travels in the HTTP-only cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
}

/// Stored credentials looked up at sign-in. Never serialized.
#[derive(Debug, Clone, FromRow)]
pub struct Credentials {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_request_validation() {
        let valid = SignUpRequest {
            username: "senku".to_string(),
            password: "strongpassword".to_string(),
        };
        assert!(valid.validate().is_ok());

        let short_username = SignUpRequest {
            username: "ab".to_string(),
            password: "strongpassword".to_string(),
        };
        assert!(short_username.validate().is_err());

        let short_password = SignUpRequest {
            username: "senku".to_string(),
            password: "short".to_string(),
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_sign_in_request_requires_both_fields() {
        let empty = SignInRequest {
            username: String::new(),
            password: String::new(),
        };
        let errors = empty.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_session_response_serializes_role_tag() {
        let response = SessionResponse {
            id: Uuid::nil(),
            username: "taiju".to_string(),
            role: Role::Staff,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["role"], "staff");
        assert_eq!(json["username"], "taiju");
    }
}
