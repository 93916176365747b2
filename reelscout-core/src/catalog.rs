//! Seam between session state and the movie metadata service.

use async_trait::async_trait;

use crate::errors::{DetailsError, SearchError};
use crate::types::{DetailRecord, SearchPage};

/// Source of search pages and detail records.
///
/// Implementations issue one outbound call per invocation, with no retries
/// and no timeout enforcement.
#[async_trait]
pub trait MovieCatalog: Send + Sync + std::fmt::Debug {
    /// Fetches one page of movie results for a free-text query.
    ///
    /// # Errors
    /// - `GatewayError::Transport` - Request could not be delivered
    /// - `GatewayError::Http` - Non-success HTTP status
    /// - `GatewayError::NotFound` - Service reported no matches
    /// - `GatewayError::Malformed` - Response body was not understood
    async fn search(&self, query: &str, page: u32) -> Result<SearchPage, SearchError>;

    /// Fetches the full record for one title.
    ///
    /// # Errors
    /// - `GatewayError::Transport` - Request could not be delivered
    /// - `GatewayError::Http` - Non-success HTTP status
    /// - `GatewayError::NotFound` - Service does not know the id
    /// - `GatewayError::Malformed` - Response body was not understood
    async fn fetch_details(&self, id: &str) -> Result<DetailRecord, DetailsError>;
}
