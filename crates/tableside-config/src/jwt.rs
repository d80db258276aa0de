//! Session token configuration.
//!
//! The signing secret is never compiled in. It is pulled from a
//! [`SecretProvider`]; the stock [`EnvSecretProvider`] reads `JWT_SECRET`
//! or the file named by `JWT_SECRET_FILE` (for mounted secrets).
//!
//! Rotation: put the new secret in `JWT_SECRET` and move the old one to
//! `JWT_PREVIOUS_SECRETS`. New tokens are signed with the current secret;
//! tokens signed with a previous one keep verifying until they expire.

use std::env;

use crate::{ConfigError, parsed_or};

/// Source of the token signing material.
pub trait SecretProvider {
    /// Secret used to sign new tokens.
    fn signing_secret(&self) -> Result<String, ConfigError>;

    /// Retired secrets still accepted when verifying.
    fn previous_secrets(&self) -> Result<Vec<String>, ConfigError>;
}

/// Reads secrets from the process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvSecretProvider;

impl SecretProvider for EnvSecretProvider {
    fn signing_secret(&self) -> Result<String, ConfigError> {
        if let Ok(path) = env::var("JWT_SECRET_FILE")
            && !path.trim().is_empty()
        {
            let contents =
                std::fs::read_to_string(path.trim()).map_err(|source| ConfigError::SecretFile {
                    path: path.clone(),
                    source,
                })?;
            return Ok(contents.trim_end().to_string());
        }

        crate::required("JWT_SECRET")
    }

    fn previous_secrets(&self) -> Result<Vec<String>, ConfigError> {
        Ok(env::var("JWT_PREVIOUS_SECRETS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    }
}

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub previous_secrets: Vec<String>,
    /// Token lifetime in seconds.
    pub access_token_expiry: i64,
    pub cookie_name: String,
    pub cookie_secure: bool,
}

impl JwtConfig {
    pub const MIN_SECRET_LEN: usize = 32;
    pub const DEFAULT_ACCESS_EXPIRY: i64 = 24 * 60 * 60;
    pub const DEFAULT_COOKIE_NAME: &'static str = "token";

    /// Config with default lifetime and cookie settings around `secret`.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            previous_secrets: Vec::new(),
            access_token_expiry: Self::DEFAULT_ACCESS_EXPIRY,
            cookie_name: Self::DEFAULT_COOKIE_NAME.to_string(),
            cookie_secure: false,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::from_provider(&EnvSecretProvider)?;
        config.access_token_expiry = parsed_or("JWT_ACCESS_EXPIRY", Self::DEFAULT_ACCESS_EXPIRY)?;
        if config.access_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                name: "JWT_ACCESS_EXPIRY",
                reason: "must be a positive number of seconds".to_string(),
            });
        }
        config.cookie_name = env::var("SESSION_COOKIE_NAME")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_COOKIE_NAME.to_string());
        config.cookie_secure = parsed_or("COOKIE_SECURE", false)?;
        Ok(config)
    }

    pub fn from_provider<P>(provider: &P) -> Result<Self, ConfigError>
    where
        P: SecretProvider + ?Sized,
    {
        let secret = provider.signing_secret()?;
        check_secret("JWT_SECRET", &secret)?;

        let previous_secrets = provider.previous_secrets()?;
        for previous in &previous_secrets {
            check_secret("JWT_PREVIOUS_SECRETS", previous)?;
        }

        Ok(Self {
            previous_secrets,
            ..Self::new(secret)
        })
    }

    pub fn with_previous_secrets(mut self, previous: Vec<String>) -> Self {
        self.previous_secrets = previous;
        self
    }

    /// Secrets to try when verifying, current first.
    pub fn verification_secrets(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.secret.as_str()).chain(self.previous_secrets.iter().map(String::as_str))
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[redacted]")
            .field("previous_secrets", &self.previous_secrets.len())
            .field("access_token_expiry", &self.access_token_expiry)
            .field("cookie_name", &self.cookie_name)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

fn check_secret(name: &'static str, secret: &str) -> Result<(), ConfigError> {
    if secret.len() < JwtConfig::MIN_SECRET_LEN {
        return Err(ConfigError::Invalid {
            name,
            reason: format!(
                "secret must be at least {} bytes",
                JwtConfig::MIN_SECRET_LEN
            ),
        });
    }
    Ok(())
}
