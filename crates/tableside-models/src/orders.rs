//! Table orders.
//!
//! Status machine:
//!
//! ```text
//! pending -> confirmed -> prepared -> completed
//!    \           \            \
//!     +-----------+------------+--> cancelled
//! ```
//!
//! `completed` and `cancelled` are terminal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Prepared,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Whether an order in `self` may move to `next`.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;

        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Confirmed, Prepared)
                | (Prepared, Completed)
                | (Pending | Confirmed | Prepared, Cancelled)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Prepared => "prepared",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub staff_id: Uuid,
    pub table_number: String,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Line item with the unit price captured when the order was placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderLineDto {
    pub product_id: Uuid,
    #[validate(range(min = 1))]
    #[schema(example = 2)]
    pub quantity: i32,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateOrderDto {
    #[validate(length(min = 1, max = 32))]
    #[schema(example = "12")]
    pub table_number: String,
    #[validate(length(min = 1), nested)]
    pub products: Vec<OrderLineDto>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusDto {
    pub status: OrderStatus,
}

/// Sum of `quantity * unit_price` over `(quantity, unit_price)` pairs.
pub fn calculate_total<I>(lines: I) -> f64
where
    I: IntoIterator<Item = (i32, f64)>,
{
    lines
        .into_iter()
        .map(|(quantity, unit_price)| f64::from(quantity) * unit_price)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Prepared,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    #[test]
    fn test_forward_transitions() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Confirmed));
        assert!(OrderStatus::Confirmed.can_transition_to(OrderStatus::Prepared));
        assert!(OrderStatus::Prepared.can_transition_to(OrderStatus::Completed));
    }

    #[test]
    fn test_cancel_allowed_before_completion() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::Confirmed.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::Prepared.can_transition_to(OrderStatus::Cancelled));
    }

    #[test]
    fn test_illegal_transitions() {
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Prepared));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Completed));
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Confirmed.can_transition_to(OrderStatus::Pending));
        for status in ALL {
            assert!(!status.can_transition_to(status));
        }
    }

    #[test]
    fn test_terminal_states_have_no_exit() {
        for from in ALL.into_iter().filter(|s| s.is_terminal()) {
            for to in ALL {
                assert!(!from.can_transition_to(to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn test_calculate_total() {
        assert_eq!(calculate_total([(2, 10.0), (1, 5.0)]), 25.0);
        assert_eq!(calculate_total(Vec::new()), 0.0);
    }

    #[test]
    fn test_create_order_dto_validation() {
        let valid = CreateOrderDto {
            table_number: "4".to_string(),
            products: vec![OrderLineDto {
                product_id: Uuid::new_v4(),
                quantity: 1,
            }],
        };
        assert!(valid.validate().is_ok());

        let empty = CreateOrderDto {
            table_number: "4".to_string(),
            products: vec![],
        };
        assert!(empty.validate().is_err());

        let zero_quantity = CreateOrderDto {
            table_number: "4".to_string(),
            products: vec![OrderLineDto {
                product_id: Uuid::new_v4(),
                quantity: 0,
            }],
        };
        assert!(zero_quantity.validate().is_err());

        let no_table = CreateOrderDto {
            table_number: String::new(),
            products: vec![OrderLineDto {
                product_id: Uuid::new_v4(),
                quantity: 1,
            }],
        };
        assert!(no_table.validate().is_err());
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Prepared).unwrap(),
            r#""prepared""#
        );
        let parsed: UpdateOrderStatusDto =
            serde_json::from_str(r#"{"status":"cancelled"}"#).unwrap();
        assert_eq!(parsed.status, OrderStatus::Cancelled);
    }
}
