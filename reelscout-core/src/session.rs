//! The process-wide search session and the pager derived from it.

use serde::{Deserialize, Serialize};

use crate::errors::SearchError;
use crate::types::{SearchPage, SearchResultItem};

/// Results per page. Fixed by the service, not configurable.
pub const PAGE_SIZE: u32 = 10;

/// Highest page the service will serve.
pub const MAX_PAGE: u32 = 100;

/// Highest navigable page for a result count.
///
/// `min(100, ceil(total / 10))`, and 1 when there are no results.
pub fn max_page(total_results: u32) -> u32 {
    total_results.div_ceil(PAGE_SIZE).clamp(1, MAX_PAGE)
}

/// Query, page and results currently on screen.
///
/// `items` always belongs to exactly `query` and `page`. The session is only
/// ever replaced as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSession {
    pub query: String,
    pub page: u32,
    pub total_results: u32,
    pub items: Vec<SearchResultItem>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            total_results: 0,
            items: Vec::new(),
        }
    }
}

impl SearchSession {
    /// Applies the outcome of a search for `(query, page)`.
    ///
    /// Success and expected "nothing found" outcomes replace the session.
    /// Transport and HTTP failures leave the previous session in place.
    pub fn apply_search_result(
        &mut self,
        query: &str,
        page: u32,
        outcome: Result<SearchPage, SearchError>,
    ) {
        let (total_results, items) = match outcome {
            Ok(result) => (result.total_results, result.items),
            Err(e) if e.is_expected() => (0, Vec::new()),
            Err(_) => return,
        };

        *self = SearchSession {
            query: query.to_string(),
            page,
            total_results,
            items,
        };
    }

    pub fn max_page(&self) -> u32 {
        max_page(self.total_results)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.max_page()
    }

    pub fn pager(&self) -> Pager {
        Pager::for_page(self.page, self.total_results)
    }
}

/// Previous/next control state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    pub page: u32,
    pub max_page: u32,
    pub has_previous: bool,
    pub has_next: bool,
    pub label: String,
}

impl Pager {
    /// Controls for `page` of a result set with `total_results` entries.
    pub fn for_page(page: u32, total_results: u32) -> Self {
        let max_page = max_page(total_results);
        Self {
            page,
            max_page,
            has_previous: page > 1,
            has_next: page < max_page,
            label: format!("Page {page}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GatewayError;
    use crate::types::MediaType;

    fn item(id: &str) -> SearchResultItem {
        SearchResultItem {
            id: id.to_string(),
            title: format!("Title {id}"),
            year: "1999".to_string(),
            media_type: MediaType::Movie,
            poster_url: None,
        }
    }

    #[test]
    fn test_max_page_bounds() {
        assert_eq!(max_page(0), 1);
        assert_eq!(max_page(1), 1);
        assert_eq!(max_page(10), 1);
        assert_eq!(max_page(11), 2);
        assert_eq!(max_page(999), 100);
        assert_eq!(max_page(1000), 100);
        assert_eq!(max_page(45_000), 100);
    }

    #[test]
    fn test_pager_enablement() {
        let mut session = SearchSession::default();
        session.apply_search_result(
            "matrix",
            1,
            Ok(SearchPage {
                total_results: 25,
                items: vec![item("a")],
            }),
        );
        let pager = session.pager();
        assert_eq!(pager.max_page, 3);
        assert!(!pager.has_previous);
        assert!(pager.has_next);
        assert_eq!(pager.label, "Page 1");

        session.apply_search_result(
            "matrix",
            3,
            Ok(SearchPage {
                total_results: 25,
                items: vec![item("b")],
            }),
        );
        let pager = session.pager();
        assert!(pager.has_previous);
        assert!(!pager.has_next);
    }

    #[test]
    fn test_not_found_clears_results_and_keeps_query() {
        let mut session = SearchSession::default();
        session.apply_search_result(
            "matrix",
            1,
            Ok(SearchPage {
                total_results: 3,
                items: vec![item("a"), item("b"), item("c")],
            }),
        );

        session.apply_search_result(
            "zzzz",
            1,
            Err(GatewayError::NotFound {
                message: "Movie not found!".to_string(),
            }),
        );

        assert_eq!(session.query, "zzzz");
        assert_eq!(session.total_results, 0);
        assert!(session.items.is_empty());
        assert_eq!(session.max_page(), 1);
        assert!(!session.has_next());
        assert!(!session.has_previous());
    }

    #[test]
    fn test_transport_failure_keeps_previous_session() {
        let mut session = SearchSession::default();
        session.apply_search_result(
            "matrix",
            1,
            Ok(SearchPage {
                total_results: 1,
                items: vec![item("a")],
            }),
        );
        let before = session.clone();

        session.apply_search_result(
            "matrix",
            2,
            Err(GatewayError::Transport {
                reason: "connection refused".to_string(),
            }),
        );

        assert_eq!(session, before);
    }
}
