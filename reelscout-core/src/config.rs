//! Centralized configuration for ReelScout.
//!
//! Defaults live here; environment variables override them and CLI flags
//! override the environment.

use tracing::warn;

use crate::mode::RuntimeMode;

/// Credential embedded for the OMDb free tier.
pub const DEFAULT_OMDB_API_KEY: &str = "193a5a2a";

/// OMDb endpoint serving both search and details.
pub const DEFAULT_OMDB_BASE_URL: &str = "https://www.omdbapi.com/";

/// Central configuration for all ReelScout components.
#[derive(Debug, Clone, Default)]
pub struct ReelScoutConfig {
    pub omdb: OmdbConfig,
    pub server: ServerConfig,
    pub runtime_mode: RuntimeMode,
}

/// Movie metadata service settings.
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    /// Static credential sent with every request
    pub api_key: String,
    /// Service endpoint
    pub base_url: String,
    /// User agent for outbound requests
    pub user_agent: String,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_OMDB_API_KEY.to_string(),
            base_url: DEFAULT_OMDB_BASE_URL.to_string(),
            user_agent: format!("reelscout/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Web surface bind settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// `host:port` string for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ReelScoutConfig {
    /// Creates configuration with environment variable overrides.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup.
    ///
    /// Unparsable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(api_key) = lookup("REELSCOUT_OMDB_API_KEY") {
            config.omdb.api_key = api_key.trim().to_string();
        }

        if let Some(base_url) = lookup("REELSCOUT_OMDB_BASE_URL") {
            config.omdb.base_url = base_url.trim().to_string();
        }

        if let Some(host) = lookup("REELSCOUT_HOST") {
            config.server.host = host.trim().to_string();
        }

        if let Some(port) = lookup("REELSCOUT_PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => config.server.port = port,
                Err(e) => warn!("Ignoring REELSCOUT_PORT={port}: {e}"),
            }
        }

        if let Some(mode) = lookup("REELSCOUT_MODE") {
            match mode.parse::<RuntimeMode>() {
                Ok(mode) => config.runtime_mode = mode,
                Err(e) => warn!("Ignoring REELSCOUT_MODE: {e}"),
            }
        }

        config
    }

    /// Whether a service credential is configured.
    pub fn has_api_key(&self) -> bool {
        !self.omdb.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ReelScoutConfig::default();
        assert_eq!(config.omdb.api_key, DEFAULT_OMDB_API_KEY);
        assert_eq!(config.omdb.base_url, DEFAULT_OMDB_BASE_URL);
        assert_eq!(config.server.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.runtime_mode, RuntimeMode::Production);
        assert!(config.has_api_key());
    }

    #[test]
    fn test_environment_overrides() {
        let config = ReelScoutConfig::from_lookup(lookup_from(&[
            ("REELSCOUT_OMDB_API_KEY", " secret "),
            ("REELSCOUT_PORT", "8080"),
            ("REELSCOUT_MODE", "development"),
        ]));

        assert_eq!(config.omdb.api_key, "secret");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.runtime_mode, RuntimeMode::Development);
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let config = ReelScoutConfig::from_lookup(lookup_from(&[
            ("REELSCOUT_PORT", "not-a-port"),
            ("REELSCOUT_MODE", "staging"),
            ("REELSCOUT_OMDB_API_KEY", "   "),
        ]));

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.runtime_mode, RuntimeMode::Production);
        assert!(!config.has_api_key());
    }
}
