//! Which catalog backs the running process.

use serde::{Deserialize, Serialize};

/// Selects the real movie metadata service or the bundled demo catalog.
///
/// Both sides implement [`crate::MovieCatalog`], so nothing above the search
/// service can tell them apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    /// Queries OMDb over HTTP
    #[default]
    Production,
    /// Serves the offline demo catalog
    Development,
}

impl RuntimeMode {
    /// Whether searches leave the process.
    pub fn uses_network(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Production => "production",
            Self::Development => "development",
        })
    }
}

impl std::str::FromStr for RuntimeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" | "demo" => Ok(Self::Development),
            _ => Err(format!(
                "Invalid runtime mode: '{s}'. Expected production or development"
            )),
        }
    }
}
