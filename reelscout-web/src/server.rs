//! HTMX + Tailwind web server for ReelScout
//!
//! Provides both HTMX partial updates and JSON API endpoints over one
//! shared application state.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use reelscout_core::catalog::MovieCatalog;
use reelscout_core::config::ReelScoutConfig;
use reelscout_core::driver::{SharedReelScout, shared};
use reelscout_core::{ReelScout, ReelScoutError};
use reelscout_search::MovieSearchService;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::handlers::{
    api_details, api_search, api_view, htmx_close_details, htmx_load_details, htmx_next_page,
    htmx_open_details, htmx_previous_page, htmx_search, htmx_sort,
};
use crate::pages::search_page;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// The one client session behind every page and fragment
    pub app: SharedReelScout,
    /// Search and details backend
    pub catalog: Arc<dyn MovieCatalog>,
}

impl AppState {
    /// Fresh application state backed by `catalog`.
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self {
            app: shared(ReelScout::new()),
            catalog,
        }
    }
}

/// Builds the full router over `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Main page (HTMX + Tailwind)
        .route("/", get(search_page))
        // HTMX partial update endpoints
        .route("/htmx/search", get(htmx_search))
        .route("/htmx/page/next", post(htmx_next_page))
        .route("/htmx/page/previous", post(htmx_previous_page))
        .route("/htmx/sort", get(htmx_sort))
        .route("/htmx/details/close", post(htmx_close_details))
        .route("/htmx/details/load/{token}", get(htmx_load_details))
        .route("/htmx/details/{id}", post(htmx_open_details))
        // JSON API endpoints (for external clients)
        .route("/api/view", get(api_view))
        .route("/api/search", get(api_search))
        .route("/api/details/{id}", get(api_details))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serves ReelScout until the listener fails.
///
/// # Errors
///
/// - `ReelScoutError::Configuration` - The OMDb base URL is invalid
/// - `ReelScoutError::Io` - Binding the configured address failed
/// - `ReelScoutError::Web` - The server stopped with an error
pub async fn run_server(config: ReelScoutConfig) -> Result<(), ReelScoutError> {
    let service = MovieSearchService::from_runtime_mode(config.runtime_mode, &config.omdb)?;
    let state = AppState::new(Arc::new(service));
    let app = build_router(state);

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(mode = %config.runtime_mode, "ReelScout running on http://{address}");
    if config.runtime_mode.uses_network() && !config.has_api_key() {
        info!("No OMDb API key configured; searches will report a missing credential");
    }

    axum::serve(listener, app)
        .await
        .map_err(|e| ReelScoutError::Web {
            reason: e.to_string(),
        })?;
    Ok(())
}
