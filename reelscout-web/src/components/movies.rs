//! Search results: status line, poster grid and pager.

use reelscout_core::app::AppView;
use reelscout_core::grid::{GridCard, GridView, PosterView};
use reelscout_core::session::Pager;

use super::escape;
use super::layout::button;

/// Renders a poster image or its placeholder block.
pub fn poster(poster: &PosterView, class: &str) -> String {
    match poster {
        PosterView::Image { url, alt } => format!(
            r#"<img src="{}" alt="{}" loading="lazy" class="{class} object-cover" />"#,
            escape(url),
            escape(alt)
        ),
        PosterView::Placeholder { label } => format!(
            r#"<div class="{class} flex items-center justify-center bg-gray-700 text-gray-400 text-sm text-center p-4">{}</div>"#,
            escape(label)
        ),
    }
}

/// Renders one focusable card that opens the details overlay.
pub fn movie_card(card: &GridCard) -> String {
    let id = urlencoding::encode(&card.id);

    format!(
        r##"<article class="movie-card bg-gray-800 border border-gray-700 rounded-lg overflow-hidden cursor-pointer focus:outline-none focus:ring-2 focus:ring-reel-500"
                 tabindex="0" role="button" aria-label="{aria}"
                 hx-post="/htmx/details/{id}"
                 hx-trigger="click, keydown[key=='Enter'||key==' ']"
                 hx-vals='js:{{key: event.key || ""}}'
                 hx-target="#details" hx-swap="innerHTML">
            {poster_html}
            <div class="p-3">
                <span class="inline-block text-xs uppercase tracking-wide bg-reel-600 text-white rounded px-2 py-0.5">{badge}</span>
                <h3 class="text-white font-semibold mt-2">{title}</h3>
                <p class="text-gray-400 text-sm">{year}</p>
            </div>
        </article>"##,
        aria = escape(&card.aria_label),
        poster_html = poster(&card.poster, "w-full h-72"),
        badge = escape(&card.badge),
        title = escape(&card.title),
        year = escape(&card.year),
    )
}

/// Renders the results grid.
pub fn grid(view: &GridView) -> String {
    if view.is_empty() {
        return String::new();
    }

    let cards: String = view.cards.iter().map(movie_card).collect();
    format!(
        r#"<div id="movie-grid" class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-6">{cards}</div>"#
    )
}

/// Renders previous/next controls and the page label.
pub fn pager(pager: &Pager) -> String {
    let previous_attrs = format!(
        r##"hx-post="/htmx/page/previous" hx-target="#results" hx-swap="innerHTML"{}"##,
        if pager.has_previous { "" } else { " disabled" }
    );
    let next_attrs = format!(
        r##"hx-post="/htmx/page/next" hx-target="#results" hx-swap="innerHTML"{}"##,
        if pager.has_next { "" } else { " disabled" }
    );

    format!(
        r#"<nav class="flex items-center justify-center gap-4 mt-8" aria-label="Pagination">
            {}
            <span id="page-label" class="text-gray-300">{}</span>
            {}
        </nav>"#,
        button("Previous", "secondary", Some(&previous_attrs)),
        escape(&pager.label),
        button("Next", "secondary", Some(&next_attrs)),
    )
}

/// Inner HTML of the `#results` region.
pub fn results_fragment(view: &AppView) -> String {
    format!(
        r#"<p id="status" class="text-gray-300 mb-6" role="status" aria-live="polite">{}</p>
        {}
        {}"#,
        escape(&view.status),
        grid(&view.grid),
        pager(&view.pager),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelscout_core::types::{MediaType, SearchResultItem};

    fn card(poster_url: Option<&str>) -> GridCard {
        GridCard::from_item(&SearchResultItem {
            id: "tt0372784".to_string(),
            title: "Batman Begins".to_string(),
            year: "2005".to_string(),
            media_type: MediaType::Movie,
            poster_url: poster_url.map(str::to_string),
        })
    }

    #[test]
    fn test_card_with_placeholder_poster() {
        let html = movie_card(&card(None));
        assert!(html.contains("No poster available"));
        assert!(!html.contains("<img"));
        assert!(html.contains(r#"hx-post="/htmx/details/tt0372784""#));
        assert!(html.contains(r#"aria-label="Open details for Batman Begins""#));
    }

    #[test]
    fn test_card_with_image_poster() {
        let html = movie_card(&card(Some("https://img.example/batman.jpg")));
        assert!(html.contains(r#"src="https://img.example/batman.jpg""#));
        assert!(html.contains(r#"alt="Batman Begins poster""#));
    }

    #[test]
    fn test_pager_disables_unavailable_directions() {
        let html = pager(&Pager {
            page: 1,
            max_page: 1,
            has_previous: false,
            has_next: false,
            label: "Page 1".to_string(),
        });
        assert_eq!(html.matches(" disabled>").count(), 2);
        assert!(html.contains("Page 1"));

        let html = pager(&Pager::for_page(1, 25));
        assert_eq!(html.matches(" disabled>").count(), 1);
        assert!(html.contains(
            r##"hx-post="/htmx/page/previous" hx-target="#results" hx-swap="innerHTML" disabled>"##
        ));
    }

    #[test]
    fn test_empty_grid_renders_nothing() {
        assert!(grid(&GridView::default()).is_empty());
    }
}
