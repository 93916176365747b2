//! ReelScout Core - Search session state and view models
//!
//! This crate holds everything between the movie metadata service and the
//! presentation layer: domain types, the single process-wide search session,
//! sorting, the grid and details overlay view models, and the request
//! sequencing that keeps stale responses from overwriting newer state.

pub mod app;
pub mod catalog;
pub mod config;
pub mod driver;
pub mod errors;
pub mod grid;
pub mod mode;
pub mod overlay;
pub mod sequencer;
pub mod session;
pub mod sort;
pub mod status;
pub mod tracing_setup;
pub mod types;

// Re-export main types for convenient access
pub use app::{AppView, ReelScout, SearchTicket};
pub use catalog::MovieCatalog;
pub use config::ReelScoutConfig;
pub use errors::{DetailsError, GatewayError, SearchError};
pub use mode::RuntimeMode;
pub use sequencer::{Commit, RequestToken};
pub use session::SearchSession;
pub use sort::SortOrder;
pub use types::{DetailRecord, MediaType, NOT_AVAILABLE, SearchPage, SearchResultItem};

/// Errors that can bubble up from any ReelScout subsystem.
#[derive(Debug, thiserror::Error)]
pub enum ReelScoutError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Web server error: {reason}")]
    Web { reason: String },
}

impl ReelScoutError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            ReelScoutError::Gateway(e) => e.to_string(),
            ReelScoutError::Configuration { reason } => format!("Invalid configuration: {reason}"),
            ReelScoutError::Io(_) => "File system error occurred".to_string(),
            ReelScoutError::Web { reason } => format!("Web interface error: {reason}"),
        }
    }

    /// Checks if this error is due to user input or configuration.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ReelScoutError::Configuration { .. }
                | ReelScoutError::Gateway(GatewayError::InvalidQuery)
                | ReelScoutError::Gateway(GatewayError::MissingCredential)
        )
    }
}

pub type Result<T> = std::result::Result<T, ReelScoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_error_classification() {
        assert!(ReelScoutError::Gateway(GatewayError::InvalidQuery).is_user_error());
        assert!(
            !ReelScoutError::Gateway(GatewayError::Http { status: 503 }).is_user_error()
        );
        assert_eq!(
            ReelScoutError::Configuration {
                reason: "bad port".to_string()
            }
            .user_message(),
            "Invalid configuration: bad port"
        );
    }
}
