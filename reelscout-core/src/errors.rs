//! Error taxonomy for calls to the movie metadata service.

use thiserror::Error;

/// Failures of a search or details request.
///
/// `NotFound` is the service's structured "no results" answer and is a
/// normal outcome, not a fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Network unreachable, DNS failure, connection reset.
    #[error("{reason}")]
    Transport {
        /// Underlying transport message
        reason: String,
    },

    /// Service answered with a non-success HTTP status.
    #[error("HTTP {status}")]
    Http {
        /// HTTP status code
        status: u16,
    },

    /// Service reported that nothing matched.
    #[error("{message}")]
    NotFound {
        /// Human-readable explanation from the service
        message: String,
    },

    /// Response body could not be interpreted.
    #[error("Malformed response: {reason}")]
    Malformed {
        /// What was wrong with the body
        reason: String,
    },

    /// Query was empty after trimming, or the page was zero.
    #[error("Search query must not be empty")]
    InvalidQuery,

    /// No service credential is configured.
    #[error("No OMDb API key configured")]
    MissingCredential,
}

/// Errors of the search operation.
pub type SearchError = GatewayError;

/// Errors of the details operation.
pub type DetailsError = GatewayError;

impl GatewayError {
    /// Whether this is an expected outcome rather than a fault.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            GatewayError::NotFound { .. } | GatewayError::Malformed { .. }
        )
    }
}
