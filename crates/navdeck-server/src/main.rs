//! navdeck server entry point.
//!
//! Bootstraps the storage backend and board store from the environment,
//! then starts the Axum HTTP server with graceful shutdown.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use navdeck_core::auth::AdminToken;
use navdeck_core::board::BoardStore;
use navdeck_storage::MemoryBackend;

use navdeck_server::config::{ServerConfig, StorageBackendType};
use navdeck_server::routes;
use navdeck_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    info!(storage = ?config.storage_backend, "navdeck starting");

    let storage: Arc<dyn navdeck_storage::StorageBackend> = match &config.storage_backend {
        StorageBackendType::Memory => {
            info!("using in-memory storage (board will not persist)");
            Arc::new(MemoryBackend::new())
        }
        #[cfg(feature = "redb-backend")]
        StorageBackendType::Redb { path } => {
            if let Some(parent) = std::path::Path::new(path).parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create storage directory {}", parent.display()))?;
            }
            info!(path = %path, "using redb storage");
            Arc::new(
                navdeck_storage::RedbBackend::open(path).context("failed to open redb storage")?,
            )
        }
        #[cfg(not(feature = "redb-backend"))]
        StorageBackendType::Redb { .. } => {
            anyhow::bail!("redb backend requested but feature 'redb-backend' is not enabled");
        }
    };

    let admin = match config.admin_token {
        Some(secret) => AdminToken::new(secret),
        None => {
            let token = AdminToken::generate();
            // Set NAVDECK_ADMIN_TOKEN to keep the secret out of the logs.
            warn!(token = %token.reveal(), "NAVDECK_ADMIN_TOKEN not set, generated one for this run");
            token
        }
    };

    let state = Arc::new(AppState {
        board: BoardStore::new(storage),
        admin,
    });

    let app = routes::router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "navdeck listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("navdeck stopped");
    Ok(())
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
