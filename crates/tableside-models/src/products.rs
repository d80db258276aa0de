use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub title: String,
    pub description: String,
    pub unit_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductDto {
    #[validate(length(min = 1, max = 200))]
    #[schema(example = "Wagyu Beef")]
    pub title: String,
    #[validate(length(max = 2000))]
    #[serde(default)]
    #[schema(example = "Tender wagyu beef")]
    pub description: String,
    #[validate(range(min = 0.0))]
    #[schema(example = 24.9)]
    pub unit_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(title: &str, unit_price: f64) -> CreateProductDto {
        CreateProductDto {
            title: title.to_string(),
            description: String::new(),
            unit_price,
        }
    }

    #[test]
    fn test_create_product_dto_validation() {
        assert!(dto("Wagyu Beef", 24.9).validate().is_ok());
        assert!(dto("Water", 0.0).validate().is_ok());
        assert!(dto("", 1.0).validate().is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let errors = dto("Refund", -1.0).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("unit_price"));
    }

    #[test]
    fn test_description_defaults_to_empty() {
        let parsed: CreateProductDto =
            serde_json::from_str(r#"{"title":"Miso","unit_price":3.5}"#).unwrap();
        assert_eq!(parsed.description, "");
    }
}
