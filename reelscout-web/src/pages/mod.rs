//! Full HTML pages.

pub mod search;

use axum::response::Html;
use chrono::Datelike;

use crate::components::{escape, layout};

pub use search::search_page;

/// Wraps page content in the document shell with Tailwind and HTMX loaded.
pub fn render_page(title: &str, content: &str) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{} - ReelScout</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <script src="https://unpkg.com/htmx.org@1.9.10"></script>
            <script>
                tailwind.config = {{
                    darkMode: 'class',
                    theme: {{
                        extend: {{
                            colors: {{
                                'reel': {{
                                    400: '#f5b94a',
                                    500: '#e8a317',
                                    600: '#c98a0c'
                                }}
                            }}
                        }}
                    }}
                }}
            </script>
            <style>
                .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
                .htmx-request .htmx-indicator {{ opacity: 1; }}
                .htmx-request.htmx-indicator {{ opacity: 1; }}
                .movie-card {{ transition: transform 0.15s ease-out; }}
                .movie-card:hover, .movie-card:focus {{ transform: translateY(-4px); }}
            </style>
        </head>
        <body class="bg-gray-900 text-white min-h-screen font-sans">
            <main class="max-w-7xl mx-auto px-4 py-8">
                {}
            </main>
            {}
        </body>
        </html>"#,
        escape(title),
        content,
        layout::footer(chrono::Utc::now().year()),
    );

    Html(html)
}
