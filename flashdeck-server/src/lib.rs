//! flashdeck-server library interface
//!
//! Exposes the router and application state for integration testing.

pub mod api;
pub mod config;
pub mod error;

pub use crate::error::{ApiError, ApiResult};

use std::sync::Arc;

use axum::Router;
use flashdeck_core::FlashcardStore;
use tower_http::trace::TraceLayer;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Record store handle, rooted at the configured storage directory
    pub store: Arc<FlashcardStore>,
}

impl AppState {
    pub fn new(store: FlashcardStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // UI routes (HTML pages)
        .merge(api::ui_routes())
        // API routes
        .merge(api::flashcard_routes())
        .merge(api::import_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
