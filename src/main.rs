use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::info;

use tableside::router::init_router;
use tableside::server::serve;
use tableside::state::AppState;
use tableside_config::AppConfig;
use tableside_db::{init_db_pool, run_migrations};
use tableside_observability::{
    init_basic_console_logging, init_metrics, init_tracing, is_observability_enabled,
    metrics_app, shutdown_tracer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    if is_observability_enabled() {
        init_tracing().context("failed to initialize tracing")?;
    } else {
        init_basic_console_logging();
    }

    let config = AppConfig::from_env().context("invalid configuration")?;

    let db = init_db_pool(&config.database)
        .await
        .context("failed to connect to database")?;
    run_migrations(&db)
        .await
        .context("failed to apply migrations")?;

    let state = AppState::new(db, &config);
    let mut app = init_router(state);

    if let Some(handle) = init_metrics().context("failed to install metrics recorder")? {
        app = app.merge(metrics_app(handle));
    }

    let listener = TcpListener::bind(config.server.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.listen_addr))?;

    info!(addr = %config.server.listen_addr, "Server listening");
    info!("Swagger UI available at /swagger-ui, Scalar at /scalar");

    serve(listener, app, config.server.shutdown_timeout).await?;

    shutdown_tracer().await;
    Ok(())
}
