//! ReelScout Web - Browser surface and JSON API

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Server-rendered HTMX pages driven by the core view models, plus JSON
//! endpoints exposing the same state to external clients.

pub mod components;
pub mod handlers;
pub mod pages;
pub mod server;

// Re-export main types
pub use server::{AppState, build_router, run_server};
