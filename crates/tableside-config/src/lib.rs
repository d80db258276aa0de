//! # Tableside Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`server`]: listen address and shutdown bound
//! - [`database`]: PostgreSQL connection settings
//! - [`jwt`]: session token signing, rotation and cookie settings
//! - [`cors`]: allowed origins
//!
//! Required values are never defaulted. [`AppConfig::from_env`] fails with a
//! [`ConfigError`] naming the first missing or invalid variable so the
//! process can refuse to start.
//!
//! # Example
//!
//! ```ignore
//! use tableside_config::AppConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = AppConfig::from_env()?;
//! println!("listening on {}", config.server.listen_addr);
//! ```

pub mod cors;
pub mod database;
pub mod error;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use jwt::{EnvSecretProvider, JwtConfig, SecretProvider};
pub use server::ServerConfig;

/// Everything the API server needs to boot.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            cors: CorsConfig::from_env(),
        })
    }
}

pub(crate) fn required(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

pub(crate) fn parsed_or<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                name,
                reason: e.to_string(),
            })
        }
        _ => Ok(default),
    }
}
