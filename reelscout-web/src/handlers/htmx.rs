//! HTMX partial update endpoints.
//!
//! Search and paging handlers answer with the inner HTML of `#results`;
//! details handlers answer with the inner HTML of `#details`. A response
//! that lost its race answers `204 No Content`, which HTMX leaves unswapped.

use axum::Form;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use reelscout_core::app::SearchTicket;
use reelscout_core::driver::{run_details, run_search};
use reelscout_core::grid::Activation;
use reelscout_core::overlay::DismissTrigger;
use reelscout_core::sequencer::RequestToken;
use reelscout_core::sort::SortOrder;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::components::{details, movies};
use crate::server::AppState;

/// Query string of the search form.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    /// Raw query text
    #[serde(default)]
    pub q: String,
}

/// Query string of the sort selector.
#[derive(Debug, Deserialize)]
pub struct SortForm {
    /// Selector value such as `az` or `newest`
    #[serde(default)]
    pub order: String,
}

/// Key that activated a card; absent for pointer clicks.
#[derive(Debug, Default, Deserialize)]
pub struct ActivationForm {
    /// DOM key name
    pub key: Option<String>,
}

/// What asked the overlay to close.
#[derive(Debug, Default, Deserialize)]
pub struct DismissForm {
    /// `close`, `backdrop`, `panel` or `escape`; absent means the close button
    pub trigger: Option<String>,
}

/// Starts a fresh search at page 1 and renders the results region.
pub async fn htmx_search(State(state): State<AppState>, Query(form): Query<SearchForm>) -> Html<String> {
    let ticket = state.app.write().await.submit_query(&form.q);
    drive_search(&state, ticket).await
}

/// Requests the following page.
pub async fn htmx_next_page(State(state): State<AppState>) -> Html<String> {
    let ticket = state.app.write().await.next_page();
    drive_search(&state, ticket).await
}

/// Requests the preceding page.
pub async fn htmx_previous_page(State(state): State<AppState>) -> Html<String> {
    let ticket = state.app.write().await.previous_page();
    drive_search(&state, ticket).await
}

/// Re-projects the current results in another order. No network call.
pub async fn htmx_sort(State(state): State<AppState>, Query(form): Query<SortForm>) -> Html<String> {
    let order = SortOrder::from_value_or_default(&form.order);
    let mut app = state.app.write().await;
    app.set_sort(order);
    Html(movies::results_fragment(&app.view()))
}

/// Opens the overlay for a card and renders its loading panel.
pub async fn htmx_open_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ActivationForm>,
) -> Response {
    let activation = Activation::from_key_name(form.key.as_deref());
    let mut app = state.app.write().await;

    match app.activate(&id, &activation) {
        Some(ticket) => {
            Html(details::overlay_fragment(&app.overlay(), Some(ticket.token))).into_response()
        }
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Fetches the record for a loading ticket and renders the result.
pub async fn htmx_load_details(State(state): State<AppState>, Path(token): Path<u64>) -> Response {
    let pending = state
        .app
        .read()
        .await
        .pending_details(RequestToken::from_value(token));

    let Some(ticket) = pending else {
        debug!(token, "Details ticket no longer pending");
        return StatusCode::NO_CONTENT.into_response();
    };

    let commit = run_details(&state.app, state.catalog.as_ref(), ticket).await;
    if !commit.is_applied() {
        return StatusCode::NO_CONTENT.into_response();
    }

    let overlay = state.app.read().await.overlay();
    Html(details::overlay_fragment(&overlay, None)).into_response()
}

/// Dismisses the overlay; a content-panel click answers 204.
pub async fn htmx_close_details(
    State(state): State<AppState>,
    Form(form): Form<DismissForm>,
) -> Response {
    let trigger = match form.trigger.as_deref() {
        None => DismissTrigger::CloseButton,
        Some(raw) => match raw.parse() {
            Ok(trigger) => trigger,
            Err(e) => {
                warn!("Ignoring dismiss request: {e}");
                return StatusCode::NO_CONTENT.into_response();
            }
        },
    };

    if state.app.write().await.dismiss_details(trigger) {
        Html(String::new()).into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

async fn drive_search(state: &AppState, ticket: Option<SearchTicket>) -> Html<String> {
    if let Some(ticket) = ticket {
        run_search(&state.app, state.catalog.as_ref(), ticket).await;
    }
    Html(movies::results_fragment(&state.app.read().await.view()))
}
