//! Staff members.
//!
//! A staff identity belongs to exactly one restaurant, the one whose owner
//! registered it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Public view of a staff row; the password hash is never selected into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Staff {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Staff registration by the restaurant owner.
///
/// Staff passwords may be short PINs typed on a shared terminal.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateStaffDto {
    #[validate(length(min = 3, max = 64))]
    #[schema(example = "taiju")]
    pub username: String,
    #[validate(length(min = 4, max = 128))]
    #[schema(example = "1234")]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_staff_dto_accepts_pin() {
        let dto = CreateStaffDto {
            username: "taiju".to_string(),
            password: "1234".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_staff_dto_rejects_short_values() {
        let dto = CreateStaffDto {
            username: "tj".to_string(),
            password: "123".to_string(),
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
        assert!(errors.field_errors().contains_key("password"));
    }
}
