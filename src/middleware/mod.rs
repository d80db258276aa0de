//! Request guards.
//!
//! - [`auth`]: session cookie verification and the [`auth::AuthUser`] extractor
//! - [`role`]: role checks layered on top of an authenticated request
//!
//! # Flow
//!
//! 1. Client sends the session cookie set at sign-up or sign-in
//! 2. [`auth::require_auth`] verifies it and stores an `AuthUser` in the request extensions
//! 3. Role middleware or handlers check the caller's role
//! 4. Services check ownership of the target restaurant
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn handler(auth_user: AuthUser) -> impl IntoResponse {
//!     format!("hello {}", auth_user.user_id)
//! }
//! ```

pub mod auth;
pub mod role;
