use std::net::SocketAddr;
use std::time::Duration;

use crate::{ConfigError, parsed_or, required};

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    /// Upper bound on how long in-flight requests may run after a shutdown signal.
    pub shutdown_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_addr = required("LISTEN_ADDR")?;
        let listen_addr = raw_addr
            .trim()
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: "LISTEN_ADDR",
                reason: e.to_string(),
            })?;

        let shutdown_secs: u64 = parsed_or("SHUTDOWN_TIMEOUT_SECS", 5)?;

        Ok(Self {
            listen_addr,
            shutdown_timeout: Duration::from_secs(shutdown_secs),
        })
    }
}
