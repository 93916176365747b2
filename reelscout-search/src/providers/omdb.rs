//! OMDb HTTP provider.

use async_trait::async_trait;
use reelscout_core::config::OmdbConfig;
use reelscout_core::{
    DetailRecord, DetailsError, GatewayError, MovieCatalog, ReelScoutError, SearchError,
    SearchPage,
};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::wire::{OmdbDetailsResponse, OmdbSearchResponse};

/// Result-type filter sent with every search.
pub const SEARCH_TYPE_FILTER: &str = "movie";

/// Provider querying the OMDb API over HTTP.
#[derive(Debug, Clone)]
pub struct OmdbProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: Url,
}

impl OmdbProvider {
    /// Creates a provider from configuration.
    ///
    /// # Errors
    ///
    /// - `ReelScoutError::Configuration` - Base URL is not a valid absolute URL
    ///   or the HTTP client cannot be built
    pub fn new(config: &OmdbConfig) -> Result<Self, ReelScoutError> {
        let base_url =
            Url::parse(config.base_url.trim()).map_err(|e| ReelScoutError::Configuration {
                reason: format!("invalid OMDb base URL '{}': {e}", config.base_url),
            })?;

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ReelScoutError::Configuration {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key: config.api_key.trim().to_string(),
            base_url,
        })
    }

    /// Builds a request URL carrying the credential and every non-blank parameter.
    pub fn request_url(&self, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("apikey", &self.api_key);
            for (key, value) in params {
                if !value.trim().is_empty() {
                    pairs.append_pair(key, value);
                }
            }
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, GatewayError> {
        if self.api_key.is_empty() {
            return Err(GatewayError::MissingCredential);
        }

        debug!(url = %redacted(&url), "OMDb request");

        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|e| GatewayError::Transport {
                    reason: e.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Http {
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(|e| GatewayError::Malformed {
            reason: format!("JSON parsing failed: {e}"),
        })
    }
}

/// URL with the credential masked, for logging.
fn redacted(url: &Url) -> Url {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "apikey" {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked
}

#[async_trait]
impl MovieCatalog for OmdbProvider {
    async fn search(&self, query: &str, page: u32) -> Result<SearchPage, SearchError> {
        let page = page.to_string();
        let url = self.request_url(&[("s", query), ("type", SEARCH_TYPE_FILTER), ("page", &page)]);

        self.get_json::<OmdbSearchResponse>(url)
            .await?
            .into_search_page()
    }

    async fn fetch_details(&self, id: &str) -> Result<DetailRecord, DetailsError> {
        let url = self.request_url(&[("i", id), ("plot", "full")]);

        self.get_json::<OmdbDetailsResponse>(url)
            .await?
            .into_detail_record()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn provider(api_key: &str, base_url: &str) -> OmdbProvider {
        OmdbProvider::new(&OmdbConfig {
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
            ..OmdbConfig::default()
        })
        .unwrap()
    }

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_search_url_parameters() {
        let provider = provider("key123", "https://www.omdbapi.com/");
        let url = provider.request_url(&[("s", "star wars"), ("type", "movie"), ("page", "2")]);
        let params = query_map(&url);

        assert_eq!(params["apikey"], "key123");
        assert_eq!(params["s"], "star wars");
        assert_eq!(params["type"], "movie");
        assert_eq!(params["page"], "2");
        assert_eq!(url.host_str(), Some("www.omdbapi.com"));
    }

    #[test]
    fn test_blank_parameters_are_omitted() {
        let provider = provider("key123", "https://www.omdbapi.com/");
        let url = provider.request_url(&[("s", "   "), ("i", "tt0096895"), ("y", "")]);
        let params = query_map(&url);

        assert!(!params.contains_key("s"));
        assert!(!params.contains_key("y"));
        assert_eq!(params["i"], "tt0096895");
    }

    #[test]
    fn test_invalid_base_url_is_configuration_error() {
        let result = OmdbProvider::new(&OmdbConfig {
            base_url: "not a url".to_string(),
            ..OmdbConfig::default()
        });
        assert!(matches!(result, Err(ReelScoutError::Configuration { .. })));
    }

    #[test]
    fn test_redacted_masks_credential() {
        let provider = provider("secret", "https://www.omdbapi.com/");
        let url = provider.request_url(&[("s", "alien")]);
        let masked = redacted(&url).to_string();

        assert!(!masked.contains("secret"));
        assert!(masked.contains("s=alien"));
    }

    #[tokio::test]
    async fn test_missing_credential_skips_network() {
        let provider = provider("  ", "http://127.0.0.1:9/");
        let result = provider.search("alien", 1).await;
        assert_eq!(result, Err(GatewayError::MissingCredential));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let provider = provider("key", &format!("http://{address}/"));
        let result = provider.fetch_details("tt0096895").await;
        assert!(matches!(result, Err(GatewayError::Transport { .. })));
    }
}
