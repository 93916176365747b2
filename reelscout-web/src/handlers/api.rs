//! JSON API endpoints for external clients.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reelscout_core::app::AppView;
use reelscout_core::driver::{run_details, run_search};
use reelscout_core::overlay::OverlayView;
use reelscout_core::sequencer::Commit;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::server::AppState;

/// Query string of `/api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Title to search for
    pub q: Option<String>,
    /// Defaults to 1
    pub page: Option<u32>,
}

/// Search result with whether it was committed.
#[derive(Debug, Serialize)]
pub struct SearchPayload {
    /// Whether this request was still the latest when it finished
    pub commit: Commit,
    /// State after the commit (unchanged when superseded)
    pub view: AppView,
}

/// Overlay state after a details fetch.
#[derive(Debug, Serialize)]
pub struct DetailsPayload {
    /// Whether this request was still the latest when it finished
    pub commit: Commit,
    /// Overlay as the user would now see it
    pub overlay: OverlayView,
}

/// Current state of the whole surface.
pub async fn api_view(State(state): State<AppState>) -> Json<AppView> {
    Json(state.app.read().await.view())
}

/// Runs a search and returns the resulting view.
pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = params.q.unwrap_or_default();
    let page = params.page.unwrap_or(1);

    let Some(ticket) = state.app.write().await.request_search(&query, page) else {
        return bad_request("Query must be non-empty and page must be at least 1");
    };

    let commit = run_search(&state.app, state.catalog.as_ref(), ticket).await;
    let view = state.app.read().await.view();
    Json(SearchPayload { commit, view }).into_response()
}

/// Opens the overlay for `id`, waits for the record and returns the overlay.
pub async fn api_details(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Some(ticket) = state.app.write().await.open_details(&id) else {
        return bad_request("Title id must be non-empty");
    };

    let commit = run_details(&state.app, state.catalog.as_ref(), ticket).await;
    let overlay = state.app.read().await.overlay();
    Json(DetailsPayload { commit, overlay }).into_response()
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}
