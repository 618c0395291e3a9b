//! HTTP server initialization and runtime setup.
//!
//! Opens the snapshot, builds the store and runs the Axum server until a
//! shutdown signal arrives, then flushes the store.

use crate::application::services::MappingStore;
use crate::config::Config;
use crate::infrastructure::persistence::JsonSnapshotRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - JSON snapshot repository (created empty if missing)
/// - Mapping store
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The snapshot cannot be loaded
/// - Server bind fails
/// - Server runtime error occurs
/// - The final flush fails
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(JsonSnapshotRepository::new(&config.db_file));
    let store = Arc::new(
        MappingStore::open(repository)
            .await
            .context("Failed to open mapping store")?,
    );
    tracing::info!("Mapping store ready ({} entries)", store.len().await);

    let state = AppState::new(store.clone(), config.base_url.clone());
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.listen_addr()))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");
    tracing::info!("Public URL base: {}", config.base_url);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, flushing snapshot");
    store.flush().await.context("Failed to flush snapshot")?;

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}
