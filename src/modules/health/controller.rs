/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/_health",
    responses((status = 200, description = "Service is up", body = String)),
    tag = "Health"
)]
pub async fn health_check() -> &'static str {
    "OK"
}
