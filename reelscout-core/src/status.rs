//! Status line describing the most recently committed operation.

use serde::{Deserialize, Serialize};

use crate::errors::{GatewayError, SearchError};
use crate::types::SearchPage;

/// Fallback when the service says "no results" without a message.
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// What the status surface currently reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusLine {
    #[default]
    Idle,
    Searching { query: String },
    Found { total_results: u32, query: String },
    NotFound { message: String },
    Failed { reason: String },
    MissingCredential,
}

impl StatusLine {
    /// Status for a committed search outcome.
    pub fn from_search_outcome(query: &str, outcome: &Result<SearchPage, SearchError>) -> Self {
        match outcome {
            Ok(page) => StatusLine::Found {
                total_results: page.total_results,
                query: query.to_string(),
            },
            Err(GatewayError::NotFound { message }) => StatusLine::NotFound {
                message: message.clone(),
            },
            Err(GatewayError::Malformed { .. }) => StatusLine::NotFound {
                message: NO_RESULTS_MESSAGE.to_string(),
            },
            Err(GatewayError::MissingCredential) => StatusLine::MissingCredential,
            Err(e) => StatusLine::Failed {
                reason: e.to_string(),
            },
        }
    }

    /// Text shown to the user.
    pub fn text(&self) -> String {
        match self {
            StatusLine::Idle => "Search for a movie to get started.".to_string(),
            StatusLine::Searching { .. } => "Searching...".to_string(),
            StatusLine::Found {
                total_results,
                query,
            } => format!(
                "Found {} results for \"{query}\".",
                group_thousands(*total_results)
            ),
            StatusLine::NotFound { message } => message.clone(),
            StatusLine::Failed { reason } => format!("Search failed: {reason}"),
            StatusLine::MissingCredential => {
                "Add your OMDb API key to start searching.".to_string()
            }
        }
    }
}

/// Formats a count with comma thousands separators.
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
