//! Details overlay markup.
//!
//! The overlay lives inside `#details`. While a fetch is outstanding the
//! loading panel carries a `hx-trigger="load"` element that pulls the
//! record for its ticket; a superseded ticket answers with no content.

use reelscout_core::overlay::{DetailView, OverlayContent, OverlayView};
use reelscout_core::sequencer::RequestToken;

use super::escape;
use super::movies::poster;

const CLOSE_ATTRS: &str = r##"hx-post="/htmx/details/close" hx-target="#details" hx-swap="innerHTML""##;

/// Inner HTML of the `#details` region. `loading` is the ticket the loading
/// panel should fetch, if any.
pub fn overlay_fragment(view: &OverlayView, loading: Option<RequestToken>) -> String {
    if !view.visible {
        return String::new();
    }

    let body = match &view.content {
        Some(OverlayContent::Loading { text }) => loading_panel(text, loading),
        Some(OverlayContent::Record(detail)) => record_panel(detail),
        Some(OverlayContent::Message { text }) => format!(
            r#"<p class="text-red-400 p-8 text-center" role="alert">{}</p>"#,
            escape(text)
        ),
        None => String::new(),
    };
    let scroll_lock = if view.scroll_locked {
        "<style>body { overflow: hidden; }</style>"
    } else {
        ""
    };

    format!(
        r##"<div id="details-overlay" class="fixed inset-0 z-50 bg-black/70 flex items-center justify-center p-4"
             role="dialog" aria-modal="true" aria-label="Movie details"
             {CLOSE_ATTRS} hx-vals='{{"trigger": "backdrop"}}' hx-trigger="click[target.id=='details-overlay']">
            <div class="relative bg-gray-900 border border-gray-700 rounded-lg max-w-3xl w-full max-h-[90vh] overflow-y-auto">
                <button type="button" aria-label="Close details" class="absolute top-3 right-3 text-gray-400 hover:text-white text-2xl"
                        {CLOSE_ATTRS} hx-vals='{{"trigger": "close"}}'>&times;</button>
                <span class="hidden" {CLOSE_ATTRS} hx-vals='{{"trigger": "escape"}}' hx-trigger="keyup[key=='Escape'] from:body"></span>
                {body}
            </div>
            {scroll_lock}
        </div>"##
    )
}

fn loading_panel(text: &str, loading: Option<RequestToken>) -> String {
    let loader = loading
        .map(|token| {
            format!(
                r##"<span class="hidden" hx-get="/htmx/details/load/{token}" hx-trigger="load" hx-target="#details" hx-swap="innerHTML"></span>"##
            )
        })
        .unwrap_or_default();

    format!(
        r#"<p class="text-gray-300 p-8 text-center" aria-busy="true">{}</p>{loader}"#,
        escape(text)
    )
}

fn record_panel(detail: &DetailView) -> String {
    let chips: String = detail
        .chips
        .iter()
        .map(|chip| {
            format!(
                r#"<span class="text-xs bg-gray-700 text-gray-200 rounded-full px-3 py-1">{}</span>"#,
                escape(chip)
            )
        })
        .collect();
    let facts: String = detail
        .facts
        .iter()
        .map(|(label, value)| {
            format!(
                r#"<dt class="text-gray-400">{}</dt><dd class="text-gray-200">{}</dd>"#,
                escape(label),
                escape(value)
            )
        })
        .collect();

    format!(
        r#"<div class="flex flex-col md:flex-row gap-6 p-6">
            {poster_html}
            <div class="flex-1">
                <h2 class="text-2xl font-bold text-white pr-8">{title}</h2>
                <p class="text-gray-400 mt-1">{subtitle}</p>
                <div class="flex flex-wrap gap-2 mt-4">{chips}</div>
                <p class="text-gray-200 mt-4">{plot}</p>
                <dl class="grid grid-cols-[auto_1fr] gap-x-4 gap-y-1 mt-4 text-sm">{facts}</dl>
            </div>
        </div>"#,
        poster_html = poster(&detail.poster, "w-48 h-72 rounded"),
        title = escape(&detail.title),
        subtitle = escape(&detail.subtitle),
        plot = escape(&detail.plot),
    )
}
