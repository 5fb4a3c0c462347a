//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::Result;
use axum::{extract::Extension, http::Method, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::kernel::{BasePageFetcher, HttpPageFetcher};
use crate::server::routes::{locations_handler, root_handler};

/// Shared application state
///
/// Read-only after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn BasePageFetcher>,
    pub upstream_url: Arc<str>,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn BasePageFetcher>, upstream_url: impl Into<Arc<str>>) -> Self {
        Self {
            fetcher,
            upstream_url: upstream_url.into(),
        }
    }
}

/// Build the Axum application router with the real upstream fetcher
pub fn build_app(config: &Config) -> Result<Router> {
    let fetcher = HttpPageFetcher::new(config.fetch_timeout)?;
    let state = AppState::new(Arc::new(fetcher), config.upstream_url.as_str());
    Ok(build_router(state))
}

/// Build the router around an already-constructed state
///
/// Tests use this directly to inject a mock fetcher.
pub fn build_router(state: AppState) -> Router {
    // Browser front-ends read the labels cross-origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/", get(root_handler))
        .route("/api/locations", get(locations_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
