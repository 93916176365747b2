//! OMDb response formats and their normalization.
//!
//! OMDb reports success as the string `"True"`/`"False"` in `Response`, and
//! uses `"N/A"` for missing values. Everything here maps that onto domain
//! types with a sentinel for every absent field.

use reelscout_core::overlay::DETAILS_FALLBACK_MESSAGE;
use reelscout_core::status::NO_RESULTS_MESSAGE;
use reelscout_core::types::available;
use reelscout_core::{
    DetailRecord, GatewayError, MediaType, NOT_AVAILABLE, SearchPage, SearchResultItem,
};
use serde::{Deserialize, Serialize};

/// Search endpoint response (`?s=...`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OmdbSearchResponse {
    /// `"True"` or `"False"`
    #[serde(rename = "Response")]
    pub response: Option<String>,
    /// Results of the requested page
    #[serde(rename = "Search")]
    pub search: Option<Vec<OmdbSearchEntry>>,
    /// Total hit count, as a decimal string
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
    /// Explanation when `Response` is `"False"`
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

/// One entry of the `Search` array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OmdbSearchEntry {
    /// Title of the media item
    #[serde(rename = "Title")]
    pub title: Option<String>,
    /// Release year or year range
    #[serde(rename = "Year")]
    pub year: Option<String>,
    /// IMDb identifier
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    /// Media type (movie, series, episode)
    #[serde(rename = "Type")]
    pub media_type: Option<String>,
    /// URL to poster image or `"N/A"`
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
}

/// Details endpoint response (`?i=...&plot=full`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OmdbDetailsResponse {
    /// `"True"` or `"False"`
    #[serde(rename = "Response")]
    pub response: Option<String>,
    /// Title of the media item
    #[serde(rename = "Title")]
    pub title: Option<String>,
    /// Release year as string
    #[serde(rename = "Year")]
    pub year: Option<String>,
    /// Content rating
    #[serde(rename = "Rated")]
    pub rated: Option<String>,
    /// Runtime, e.g. `"136 min"`
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    /// Comma separated genres
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    /// Full plot text
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    /// Director names
    #[serde(rename = "Director")]
    pub director: Option<String>,
    /// Main cast
    #[serde(rename = "Actors")]
    pub actors: Option<String>,
    /// Release date
    #[serde(rename = "Released")]
    pub released: Option<String>,
    /// Awards summary
    #[serde(rename = "Awards")]
    pub awards: Option<String>,
    /// IMDb rating as string
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    /// IMDb identifier
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    /// URL to poster image
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    /// Ratings from several sources, most prominent first
    #[serde(rename = "Ratings")]
    pub ratings: Option<Vec<OmdbRating>>,
    /// Explanation when `Response` is `"False"`
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

/// One entry of the `Ratings` array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OmdbRating {
    /// Rating source, e.g. `"Internet Movie Database"`
    #[serde(rename = "Source")]
    pub source: Option<String>,
    /// Rating value, e.g. `"8.1/10"`
    #[serde(rename = "Value")]
    pub value: Option<String>,
}

fn is_success(response: Option<&str>) -> Result<bool, GatewayError> {
    match response.map(str::trim) {
        Some(flag) if flag.eq_ignore_ascii_case("true") => Ok(true),
        Some(flag) if flag.eq_ignore_ascii_case("false") => Ok(false),
        Some(flag) => Err(GatewayError::Malformed {
            reason: format!("unexpected Response flag '{flag}'"),
        }),
        None => Err(GatewayError::Malformed {
            reason: "missing Response flag".to_string(),
        }),
    }
}

fn not_found(error: Option<String>, fallback: &str) -> GatewayError {
    GatewayError::NotFound {
        message: error
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| fallback.to_string()),
    }
}

/// Field value, or the sentinel when blank or absent.
fn or_sentinel(value: Option<String>) -> String {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

impl OmdbSearchResponse {
    /// Normalizes the response into a search page.
    ///
    /// # Errors
    /// - `GatewayError::NotFound` - `Response` was `"False"`
    /// - `GatewayError::Malformed` - `Response` missing or not a boolean flag
    pub fn into_search_page(self) -> Result<SearchPage, GatewayError> {
        if !is_success(self.response.as_deref())? {
            return Err(not_found(self.error, NO_RESULTS_MESSAGE));
        }

        let total_results = self
            .total_results
            .and_then(|total| total.trim().parse().ok())
            .unwrap_or(0);

        let items = self
            .search
            .unwrap_or_default()
            .into_iter()
            .map(OmdbSearchEntry::into_item)
            .collect();

        Ok(SearchPage {
            total_results,
            items,
        })
    }
}

impl OmdbSearchEntry {
    /// Converts one raw entry into a result item.
    pub fn into_item(self) -> SearchResultItem {
        let poster_url = self
            .poster
            .as_deref()
            .and_then(available)
            .map(str::to_string);

        SearchResultItem {
            id: self.imdb_id.unwrap_or_default().trim().to_string(),
            title: or_sentinel(self.title),
            year: or_sentinel(self.year),
            media_type: self
                .media_type
                .as_deref()
                .map(MediaType::from)
                .unwrap_or(MediaType::Movie),
            poster_url,
        }
    }
}

impl OmdbDetailsResponse {
    /// Normalizes the response into a detail record.
    ///
    /// # Errors
    /// - `GatewayError::NotFound` - `Response` was `"False"`
    /// - `GatewayError::Malformed` - `Response` missing or not a boolean flag
    pub fn into_detail_record(self) -> Result<DetailRecord, GatewayError> {
        if !is_success(self.response.as_deref())? {
            return Err(not_found(self.error, DETAILS_FALLBACK_MESSAGE));
        }

        let top_rating = self
            .ratings
            .and_then(|ratings| ratings.into_iter().next())
            .and_then(|rating| rating.value);

        Ok(DetailRecord {
            id: or_sentinel(self.imdb_id),
            title: or_sentinel(self.title),
            year: or_sentinel(self.year),
            rated: or_sentinel(self.rated),
            runtime: or_sentinel(self.runtime),
            genre: or_sentinel(self.genre),
            plot: or_sentinel(self.plot),
            director: or_sentinel(self.director),
            actors: or_sentinel(self.actors),
            released: or_sentinel(self.released),
            awards: or_sentinel(self.awards),
            imdb_rating: or_sentinel(self.imdb_rating),
            top_rating: or_sentinel(top_rating),
            poster_url: or_sentinel(self.poster),
        })
    }
}
