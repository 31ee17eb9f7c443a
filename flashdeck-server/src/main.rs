//! flashdeck-server - Flashcard web service entry point
//!
//! Serves a small JSON API (plus a single-page web UI) for creating,
//! listing, updating and bulk-importing vocabulary flashcards, each
//! persisted as one JSON file in the storage directory.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use flashdeck_core::FlashcardStore;
use flashdeck_server::config::{Args, Config};
use flashdeck_server::{build_router, AppState};
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting flashdeck-server v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    // Parse command-line arguments and resolve configuration
    let args = Args::parse();
    let config = Config::resolve(&args);

    info!("Storage directory: {}", config.storage_dir.display());

    // Open the store, creating the storage directory if absent
    let store = FlashcardStore::open(&config.storage_dir)
        .await
        .context("Failed to initialize storage directory")?;

    // Create application state and router
    let state = AppState::new(store);
    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("flashdeck-server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
