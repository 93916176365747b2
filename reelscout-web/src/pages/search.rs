//! Search page - query form, sort selector, results and details overlay

use axum::extract::State;
use axum::response::Html;

use crate::components::{details, layout, movies};
use crate::pages::render_page;
use crate::server::AppState;

/// Renders the search page from the current shared state.
pub async fn search_page(State(state): State<AppState>) -> Html<String> {
    let (view, loading) = {
        let app = state.app.read().await;
        (app.view(), app.loading_details().map(|ticket| ticket.token))
    };

    let search_input = layout::input(
        "q",
        "Search movies by title...",
        &view.query,
        Some(r##"aria-label="Movie title" autocomplete="off" required"##),
    );
    let search_button = layout::button("Search", "primary", Some(r#"type="submit""#));
    let sort_select = layout::sort_select(
        &view.sort_options,
        Some(r##"hx-get="/htmx/sort" hx-trigger="change" hx-target="#results" hx-swap="innerHTML""##),
    );

    let form = format!(
        r##"<form class="flex flex-col md:flex-row gap-4" hx-get="/htmx/search" hx-target="#results" hx-swap="innerHTML" hx-indicator="#search-spinner">
            <div class="flex-1">{search_input}</div>
            {search_button}
            {sort_select}
            <span id="search-spinner" class="htmx-indicator self-center text-gray-400">Searching...</span>
        </form>"##
    );

    let content = format!(
        r#"{}
        {}
        <section id="results" aria-label="Search results">{}</section>
        <div id="details">{}</div>"#,
        layout::page_header("ReelScout", Some("Find movies in the Open Movie Database")),
        layout::card(None, &form),
        movies::results_fragment(&view),
        details::overlay_fragment(&view.overlay, loading),
    );

    render_page("Search", &content)
}
