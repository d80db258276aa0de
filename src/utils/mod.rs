//! Shared helpers for services.
//!
//! - [`auth_helpers`]: restaurant ownership and membership rules

pub mod auth_helpers;
