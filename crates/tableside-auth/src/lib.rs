//! # Tableside Auth
//!
//! Stateless session tokens for owners and staff.
//!
//! - [`claims`]: the signed payload ([`Claims`]) and the [`Role`] tag
//! - [`jwt`]: HS256 signing and verification with secret rotation
//!
//! Tokens carry everything the access guard needs (subject id and role), so
//! verifying one never touches the database. There is no revocation list:
//! a token stays valid until its `exp`.
//!
//! # Example
//!
//! ```ignore
//! use tableside_auth::{Role, create_access_token, verify_token};
//! use tableside_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let token = create_access_token(owner_id, Role::Owner, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.sub, owner_id);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::{Claims, Role};
pub use jwt::{TokenError, create_access_token, sign_claims, verify_token};
