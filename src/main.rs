use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use demo_api::config::AppConfig;
use demo_api::{logging, routes};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the real environment still applies.
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let _log_guard = logging::init(config.log_dir.as_deref())?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("🚀 demo-api listening on {}", listener.local_addr()?);

    axum::serve(listener, routes::app_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {err}");
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

    info!("Shutdown signal received, draining connections");
}
