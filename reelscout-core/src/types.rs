//! Domain types shared by the gateway, the session state and the views.

use serde::{Deserialize, Serialize};

/// Sentinel the service uses for missing values, and the one we substitute
/// for fields it leaves out entirely.
pub const NOT_AVAILABLE: &str = "N/A";

/// Returns the value unless it is blank or the sentinel.
pub fn available(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == NOT_AVAILABLE {
        None
    } else {
        Some(trimmed)
    }
}

/// Kind of title as reported by the service.
///
/// Unknown kinds are preserved so the badge still shows the service's word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaType {
    Movie,
    Series,
    Episode,
    Other(String),
}

impl MediaType {
    /// Badge text for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Series => "series",
            MediaType::Episode => "episode",
            MediaType::Other(kind) => kind,
        }
    }
}

impl From<&str> for MediaType {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "movie" => MediaType::Movie,
            "series" => MediaType::Series,
            "episode" => MediaType::Episode,
            _ => MediaType::Other(value.trim().to_string()),
        }
    }
}

impl From<String> for MediaType {
    fn from(value: String) -> Self {
        MediaType::from(value.as_str())
    }
}

impl From<MediaType> for String {
    fn from(value: MediaType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a search result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    /// Opaque external identifier (an IMDb id for OMDb)
    pub id: String,
    pub title: String,
    /// Release year, possibly a range such as "2001–2006"
    pub year: String,
    pub media_type: MediaType,
    /// Poster URL, `None` when the service has no artwork
    pub poster_url: Option<String>,
}

/// A successful search response for one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    /// Total hits across all pages
    pub total_results: u32,
    pub items: Vec<SearchResultItem>,
}

/// Full record for a single title.
///
/// Every field is populated; values the service did not provide carry
/// [`NOT_AVAILABLE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub id: String,
    pub title: String,
    pub year: String,
    pub rated: String,
    pub runtime: String,
    pub genre: String,
    pub plot: String,
    pub director: String,
    pub actors: String,
    pub released: String,
    pub awards: String,
    pub imdb_rating: String,
    /// Value of the first entry of the service's ratings list
    pub top_rating: String,
    pub poster_url: String,
}

impl DetailRecord {
    /// Poster URL if the record has real artwork.
    pub fn poster(&self) -> Option<&str> {
        available(&self.poster_url)
    }
}
