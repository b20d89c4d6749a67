//! Service entry point.
//!
//! Initializes logging, wires dependencies from the environment, and runs
//! the HTTP server until a shutdown signal arrives.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use solr_sync::api::{self, AppState};
use solr_sync::{Dependencies, ServiceError};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "Service failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServiceError> {
    let deps = Dependencies::new().await?;
    let port = deps.port;
    let store = deps.store.clone();

    let app = api::router(AppState {
        orchestrator: Arc::clone(&deps.orchestrator),
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    info!(port = port, "Starting HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down, closing MySQL pool");
    store.close().await;
    info!("Server stopped");

    Ok(())
}

/// Resolve when SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = sigterm.recv() => {},
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to register SIGTERM handler");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }

    info!("Received shutdown signal");
}
