use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Restaurant {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRestaurantDto {
    #[validate(length(min = 1, max = 200))]
    #[schema(example = "Sushi Den")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_restaurant_dto_validation() {
        let valid = CreateRestaurantDto {
            name: "Sushi Den".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = CreateRestaurantDto {
            name: String::new(),
        };
        assert!(empty.validate().is_err());

        let long = CreateRestaurantDto {
            name: "x".repeat(201),
        };
        assert!(long.validate().is_err());
    }
}
