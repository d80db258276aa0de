//! # Tableside Models
//!
//! Database rows, request DTOs and response bodies for the Tableside API.
//!
//! # Modules
//!
//! - [`auth`]: sign-up / sign-in payloads and session responses
//! - [`restaurants`]: restaurants
//! - [`staff`]: staff members of a restaurant
//! - [`products`]: a restaurant's catalog
//! - [`orders`]: table orders, line items and the status machine
//!
//! # Example
//!
//! ```ignore
//! use tableside_models::orders::{OrderStatus, calculate_total};
//!
//! assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Confirmed));
//! assert_eq!(calculate_total([(2, 10.0), (1, 5.0)]), 25.0);
//! ```

pub mod auth;
pub mod orders;
pub mod products;
pub mod restaurants;
pub mod staff;

pub use auth::{Credentials, Role, SessionResponse, SignInRequest, SignUpRequest};
pub use orders::{
    CreateOrderDto, Order, OrderItem, OrderLineDto, OrderStatus, OrderWithItems,
    UpdateOrderStatusDto, calculate_total,
};
pub use products::{CreateProductDto, Product};
pub use restaurants::{CreateRestaurantDto, Restaurant};
pub use staff::{CreateStaffDto, Staff};
