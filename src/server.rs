//! Serving with a bounded graceful shutdown.
//!
//! On SIGINT or SIGTERM the listener stops accepting connections and
//! in-flight requests get `shutdown_timeout` to finish. Whatever is still
//! running after that is dropped.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tracing::{error, info, warn};

pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown_timeout: Duration,
) -> anyhow::Result<()> {
    serve_with_shutdown(listener, app, shutdown_timeout, shutdown_signal()).await
}

/// Like [`serve`], with the shutdown trigger supplied by the caller.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    app: Router,
    shutdown_timeout: Duration,
    signal: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let signalled = Arc::new(Notify::new());
    let trigger = signalled.clone();

    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                signal.await;
                trigger.notify_one();
            })
            .await
    });

    tokio::select! {
        result = &mut server => {
            result??;
            return Ok(());
        }
        _ = signalled.notified() => {
            info!(timeout_secs = shutdown_timeout.as_secs(), "Shutdown requested, draining connections");
        }
    }

    match tokio::time::timeout(shutdown_timeout, &mut server).await {
        Ok(result) => {
            result??;
            info!("Server stopped");
        }
        Err(_) => {
            warn!("Connections still open after shutdown timeout, forcing exit");
            server.abort();
        }
    }

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
