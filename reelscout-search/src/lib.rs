//! ReelScout Search - Movie metadata gateway

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Builds and issues calls to the OMDb movie metadata service, normalizes its
//! responses into ReelScout domain types, and maps failures onto the gateway
//! error taxonomy. An offline demo catalog stands in for the service in
//! development mode.

pub mod providers;
pub mod service;
pub mod wire;

// Re-export main types
pub use providers::{DemoProvider, OmdbProvider};
pub use service::MovieSearchService;
