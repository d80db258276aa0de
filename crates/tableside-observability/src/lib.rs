//! Tableside observability
//!
//! - Tracing, with an OTLP exporter and rolling log files
//! - Prometheus metrics for HTTP traffic and domain events
//! - Per-request logging middleware
//!
//! Everything heavy sits behind the `observability` feature. With the
//! feature off the same names exist as no-ops, so callers never need
//! `cfg` attributes. At runtime `OBSERVABILITY_ENABLED=false` turns the
//! compiled-in pieces off as well.
//!
//! ```no_run
//! use tableside_observability::{init_basic_console_logging, init_tracing, is_observability_enabled, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     if is_observability_enabled() {
//!         init_tracing()?;
//!     } else {
//!         init_basic_console_logging();
//!     }
//!     // ... application code ...
//!     shutdown_tracer().await;
//!     Ok(())
//! }
//! ```

mod basic_logging;

#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::init_basic_console_logging;

#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle;

#[cfg(feature = "observability")]
pub use self::logging::{init_tracing, logging_middleware, shutdown_tracer};
#[cfg(feature = "observability")]
pub use self::metrics::{
    init_metrics, metrics_app, metrics_middleware, track_authorization_denied,
    track_identity_registered, track_order_created, track_order_status_changed, track_sign_in,
    track_token_issued, track_token_rejected,
};

#[cfg(feature = "observability")]
static OBSERVABILITY_ENABLED: std::sync::OnceLock<bool> = std::sync::OnceLock::new();

/// Runtime switch read once from `OBSERVABILITY_ENABLED` (default on).
#[cfg(feature = "observability")]
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "off"))
            .unwrap_or(true)
    })
}

#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{Router, extract::Request, middleware::Next, response::Response};

    pub fn is_observability_enabled() -> bool {
        false
    }

    pub async fn logging_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub fn init_tracing() -> anyhow::Result<()> {
        Ok(())
    }

    pub async fn shutdown_tracer() {}

    /// Stand-in for the Prometheus handle; never constructed.
    #[derive(Clone, Debug)]
    pub enum PrometheusHandle {}

    pub fn init_metrics() -> anyhow::Result<Option<PrometheusHandle>> {
        Ok(None)
    }

    pub fn metrics_app(handle: PrometheusHandle) -> Router {
        match handle {}
    }

    pub fn track_identity_registered(_role: &str) {}
    pub fn track_sign_in(_role: &str, _outcome: &str) {}
    pub fn track_token_issued(_role: &str) {}
    pub fn track_token_rejected(_reason: &str) {}
    pub fn track_order_created(_total_amount: f64) {}
    pub fn track_order_status_changed(_status: &str) {}
    pub fn track_authorization_denied(_rule: &str) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
