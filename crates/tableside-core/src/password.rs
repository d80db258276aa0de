//! Credential hashing.
//!
//! Passwords are hashed with bcrypt at [`DEFAULT_COST`]. The plain functions
//! are synchronous and CPU-bound; request handlers use the `_blocking`
//! variants, which move the work onto tokio's blocking pool.

use bcrypt::{DEFAULT_COST, hash, verify};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password must not be empty")]
    EmptyInput,
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("password worker failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Hashes `password` with a fresh salt.
///
/// # Errors
///
/// [`PasswordError::EmptyInput`] for an empty password, or the bcrypt error.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::EmptyInput);
    }
    Ok(hash(password, DEFAULT_COST)?)
}

/// Checks `password` against a bcrypt digest.
///
/// Returns `Ok(false)` on mismatch; a digest that is not valid bcrypt is an
/// error.
pub fn verify_password(password: &str, digest: &str) -> Result<bool, PasswordError> {
    Ok(verify(password, digest)?)
}

pub async fn hash_password_blocking(password: String) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await?
}

pub async fn verify_password_blocking(
    password: String,
    digest: String,
) -> Result<bool, PasswordError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &digest)).await?
}
