use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::{Duration, Instant};

use crate::is_observability_enabled;

const LATENCY_BUCKETS: &[f64] = &[
    0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];

const ORDER_AMOUNT_BUCKETS: &[f64] = &[5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0];

/// Installs the Prometheus recorder and spawns its upkeep task.
///
/// Returns `Ok(None)` when observability is switched off at runtime.
pub fn init_metrics() -> Result<Option<PrometheusHandle>, BuildError> {
    if !is_observability_enabled() {
        return Ok(None);
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            LATENCY_BUCKETS,
        )?
        .set_buckets_for_metric(
            Matcher::Full("order_total_amount".to_string()),
            ORDER_AMOUNT_BUCKETS,
        )?
        .install_recorder()?;

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Ok(Some(handle))
}

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16();

    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "path" => path)
        .record(latency);

    gauge!("http_requests_active").decrement(1.0);

    response
}

/// Router serving the Prometheus scrape endpoint.
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

pub fn track_identity_registered(role: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("identities_registered_total", "role" => role.to_string()).increment(1);
}

/// `outcome` is `success`, `unknown_user` or `bad_password`.
pub fn track_sign_in(role: &str, outcome: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!(
        "sign_ins_total",
        "role" => role.to_string(),
        "outcome" => outcome.to_string()
    )
    .increment(1);
}

pub fn track_token_issued(role: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("session_tokens_issued_total", "role" => role.to_string()).increment(1);
}

pub fn track_token_rejected(reason: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("session_tokens_rejected_total", "reason" => reason.to_string()).increment(1);
}

pub fn track_order_created(total_amount: f64) {
    if !is_observability_enabled() {
        return;
    }
    counter!("orders_created_total").increment(1);
    histogram!("order_total_amount").record(total_amount);
}

pub fn track_order_status_changed(status: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("order_status_changes_total", "status" => status.to_string()).increment(1);
}

/// `rule` names the ownership or role check that failed.
pub fn track_authorization_denied(rule: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("authorization_denied_total", "rule" => rule.to_string()).increment(1);
}
