//! Movie search service: input validation in front of a catalog provider.

use std::sync::Arc;

use async_trait::async_trait;
use reelscout_core::config::OmdbConfig;
use reelscout_core::{
    DetailRecord, DetailsError, GatewayError, MovieCatalog, ReelScoutError, RuntimeMode,
    SearchError, SearchPage,
};
use tracing::{info, instrument};

use crate::providers::{DemoProvider, OmdbProvider};

/// Request gateway used by the web and CLI surfaces.
///
/// Normalizes queries before they reach the provider and refuses requests
/// that could never succeed without making a network call.
#[derive(Debug, Clone)]
pub struct MovieSearchService {
    provider: Arc<dyn MovieCatalog>,
}

impl MovieSearchService {
    /// Creates a service over an explicit provider.
    pub fn with_provider(provider: Arc<dyn MovieCatalog>) -> Self {
        Self { provider }
    }

    /// Creates a service backed by the offline demo catalog.
    pub fn new_demo() -> Self {
        Self::with_provider(Arc::new(DemoProvider::new()))
    }

    /// Picks the provider for a runtime mode.
    ///
    /// # Errors
    ///
    /// - `ReelScoutError::Configuration` - OMDb settings are invalid
    pub fn from_runtime_mode(
        mode: RuntimeMode,
        config: &OmdbConfig,
    ) -> Result<Self, ReelScoutError> {
        info!("Creating movie search service in {mode} mode");
        match mode {
            RuntimeMode::Production => Ok(Self::with_provider(Arc::new(OmdbProvider::new(config)?))),
            RuntimeMode::Development => Ok(Self::new_demo()),
        }
    }
}

#[async_trait]
impl MovieCatalog for MovieSearchService {
    #[instrument(skip(self), level = "debug")]
    async fn search(&self, query: &str, page: u32) -> Result<SearchPage, SearchError> {
        let query = query.trim();
        if query.is_empty() || page == 0 {
            return Err(GatewayError::InvalidQuery);
        }
        self.provider.search(query, page).await
    }

    #[instrument(skip(self), level = "debug")]
    async fn fetch_details(&self, id: &str) -> Result<DetailRecord, DetailsError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(GatewayError::InvalidQuery);
        }
        self.provider.fetch_details(id).await
    }
}
