//! # Tableside Core
//!
//! Foundational types shared by every Tableside crate:
//!
//! - [`errors`]: the HTTP-aware [`AppError`]
//! - [`password`]: bcrypt credential hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use tableside_core::{AppError, hash_password, verify_password};
//!
//! let digest = hash_password("correct horse battery staple")?;
//! assert!(verify_password("correct horse battery staple", &digest)?);
//!
//! let error = AppError::not_found(anyhow::anyhow!("Restaurant not found"));
//! ```

pub mod errors;
pub mod password;

pub use errors::AppError;
pub use password::{
    PasswordError, hash_password, hash_password_blocking, verify_password,
    verify_password_blocking,
};
