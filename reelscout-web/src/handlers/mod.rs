//! HTTP request handlers organized by functionality

pub mod api;
pub mod htmx;

// Re-export handler functions
pub use api::{DetailsPayload, SearchParams, SearchPayload, api_details, api_search, api_view};
pub use htmx::{
    ActivationForm, DismissForm, SearchForm, SortForm, htmx_close_details, htmx_load_details,
    htmx_next_page, htmx_open_details, htmx_previous_page, htmx_search, htmx_sort,
};
