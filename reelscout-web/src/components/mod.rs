//! Reusable HTML fragments built from view models.
//!
//! Components return plain `String`s so pages and HTMX handlers can compose
//! them freely. Every piece of service-provided text goes through [`escape`].

pub mod details;
pub mod layout;
pub mod movies;

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
