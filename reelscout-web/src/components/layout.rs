//! Layout components - headers, cards, buttons, form controls

use reelscout_core::app::SortOption;

use super::escape;

/// Renders a page header with title and optional subtitle.
pub fn page_header(title: &str, subtitle: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="text-gray-400 mt-2">{}</p>"#, escape(s)))
        .unwrap_or_default();

    format!(
        r#"<div class="mb-8">
            <h1 class="text-3xl font-bold text-white">{}</h1>
            {subtitle_html}
        </div>"#,
        escape(title)
    )
}

/// Renders a card container with optional header.
pub fn card(title: Option<&str>, content: &str) -> String {
    let header_html = title
        .map(|t| {
            format!(
                r#"<h3 class="text-lg font-semibold text-white mb-6">{}</h3>"#,
                escape(t)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-6 mb-6">
            {header_html}
            {content}
        </div>"#
    )
}

/// Renders a button with Tailwind styling.
///
/// Variants: primary, secondary, ghost. `attributes` is inserted verbatim
/// and must already be escaped.
pub fn button(text: &str, variant: &str, attributes: Option<&str>) -> String {
    let base_classes = "px-4 py-2 rounded-lg font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-gray-900 disabled:opacity-40 disabled:cursor-not-allowed";

    let variant_classes = match variant {
        "primary" => "bg-reel-500 hover:bg-reel-600 text-white focus:ring-reel-500",
        "secondary" => "bg-gray-700 hover:bg-gray-600 text-white focus:ring-gray-500",
        "ghost" => "text-gray-300 hover:text-white hover:bg-gray-700 focus:ring-gray-500",
        _ => "bg-gray-600 hover:bg-gray-700 text-white focus:ring-gray-500",
    };

    let attrs = attributes.unwrap_or("");

    format!(
        r#"<button class="{base_classes} {variant_classes}" {attrs}>{}</button>"#,
        escape(text)
    )
}

/// Renders a text input with Tailwind styling.
pub fn input(name: &str, placeholder: &str, value: &str, attributes: Option<&str>) -> String {
    let attrs = attributes.unwrap_or("");

    format!(
        r#"<input type="search" name="{name}" placeholder="{}" value="{}"
                  class="w-full px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-reel-500 focus:border-transparent"
                  {attrs} />"#,
        escape(placeholder),
        escape(value)
    )
}

/// Renders the sort order selector.
pub fn sort_select(options: &[SortOption], attributes: Option<&str>) -> String {
    let attrs = attributes.unwrap_or("");
    let options_html: String = options
        .iter()
        .map(|option| {
            let selected = if option.selected { " selected" } else { "" };
            format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                escape(&option.value),
                escape(&option.label)
            )
        })
        .collect();

    format!(
        r#"<select name="order" aria-label="Sort results"
                   class="px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white" {attrs}>{options_html}</select>"#
    )
}

/// Renders the page footer.
pub fn footer(year: i32) -> String {
    format!(
        r#"<footer class="text-center text-gray-500 text-sm py-8">
            &copy; {year} ReelScout &middot; Data from the Open Movie Database
        </footer>"#
    )
}
