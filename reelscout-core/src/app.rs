//! Top-level controller owning all client state.
//!
//! `ReelScout` is the only owner of the search session, sort order, status
//! line and details overlay. Network calls happen outside of it: callers
//! take a ticket, await the gateway, then hand the outcome back for a
//! compare-and-discard commit.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::{DetailsError, SearchError};
use crate::grid::{Activation, GridView, project};
use crate::overlay::{DetailsOverlay, DetailsTicket, DismissTrigger, OverlayView};
use crate::sequencer::{Commit, RequestSequencer, RequestToken};
use crate::session::{Pager, SearchSession};
use crate::sort::SortOrder;
use crate::status::StatusLine;
use crate::types::{DetailRecord, SearchPage};

/// Ticket for one search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTicket {
    pub token: RequestToken,
    pub query: String,
    pub page: u32,
}

/// Client state for one browser surface.
#[derive(Debug, Default)]
pub struct ReelScout {
    session: SearchSession,
    sort_order: SortOrder,
    status: StatusLine,
    overlay: DetailsOverlay,
    searches: RequestSequencer,
    /// Latest issued `(query, page)`; `None` falls back to the session
    requested: Option<(String, u32)>,
}

impl ReelScout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh search at page 1. Blank input is a no-op.
    pub fn submit_query(&mut self, raw: &str) -> Option<SearchTicket> {
        self.request_search(raw, 1)
    }

    /// Starts a search for an explicit `(query, page)` pair.
    pub fn request_search(&mut self, raw: &str, page: u32) -> Option<SearchTicket> {
        let query = raw.trim();
        if query.is_empty() || page == 0 {
            return None;
        }

        let ticket = SearchTicket {
            token: self.searches.issue(),
            query: query.to_string(),
            page,
        };
        info!(query = %ticket.query, page, token = %ticket.token, "Search issued");
        self.requested = Some((ticket.query.clone(), page));
        self.status = StatusLine::Searching {
            query: ticket.query.clone(),
        };
        Some(ticket)
    }

    /// Requests the page after the latest requested one, if the pager allows it.
    ///
    /// Bounds come from the last committed result count.
    pub fn next_page(&mut self) -> Option<SearchTicket> {
        let (query, page) = self.current_request();
        if query.is_empty() || !self.pager().has_next {
            return None;
        }
        let query = query.to_string();
        self.request_search(&query, page + 1)
    }

    /// Requests the page before the latest requested one, if there is one.
    pub fn previous_page(&mut self) -> Option<SearchTicket> {
        let (query, page) = self.current_request();
        if query.is_empty() || !self.pager().has_previous {
            return None;
        }
        let query = query.to_string();
        self.request_search(&query, page - 1)
    }

    /// Latest issued `(query, page)`, or the committed pair when none is pending.
    pub fn current_request(&self) -> (&str, u32) {
        match &self.requested {
            Some((query, page)) => (query.as_str(), *page),
            None => (self.session.query.as_str(), self.session.page),
        }
    }

    /// Pager for the latest requested page.
    pub fn pager(&self) -> Pager {
        Pager::for_page(self.current_request().1, self.session.total_results)
    }

    /// Commits a search outcome unless a newer search was issued since.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<SearchPage, SearchError>,
    ) -> Commit {
        if !self.searches.is_latest(ticket.token) {
            debug!(query = %ticket.query, page = ticket.page, token = %ticket.token, "Dropping superseded search result");
            return Commit::Superseded;
        }

        match &outcome {
            Ok(page) => info!(
                query = %ticket.query,
                page = ticket.page,
                total_results = page.total_results,
                "Search committed"
            ),
            Err(e) if e.is_expected() => info!(query = %ticket.query, page = ticket.page, "No results: {e}"),
            Err(e) => warn!(query = %ticket.query, page = ticket.page, "Search failed: {e}"),
        }

        if matches!(&outcome, Err(e) if !e.is_expected()) {
            // Failed pages are not kept, so navigation resumes from the session
            self.requested = None;
        }
        self.status = StatusLine::from_search_outcome(&ticket.query, &outcome);
        self.session
            .apply_search_result(&ticket.query, ticket.page, outcome);
        Commit::Applied
    }

    /// Changes the display order. No network call, no session change.
    pub fn set_sort(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    /// Opens the overlay for `id` and returns the ticket to fetch with.
    pub fn open_details(&mut self, id: &str) -> Option<DetailsTicket> {
        let ticket = self.overlay.open(id)?;
        info!(id = %ticket.id, token = %ticket.token, "Details requested");
        Some(ticket)
    }

    /// Opens details for a grid card if `activation` activates it.
    pub fn activate(&mut self, id: &str, activation: &Activation) -> Option<DetailsTicket> {
        let grid = self.grid();
        let card_id = grid.card(id)?.activate(activation)?.to_string();
        self.open_details(&card_id)
    }

    /// Pending details ticket carrying `token`, if it is still current.
    pub fn pending_details(&self, token: RequestToken) -> Option<DetailsTicket> {
        self.overlay.pending_ticket(token).cloned()
    }

    /// Ticket of the details fetch the overlay is waiting on.
    pub fn loading_details(&self) -> Option<DetailsTicket> {
        self.overlay.loading_ticket().cloned()
    }

    /// Commits a details outcome unless the overlay moved on.
    pub fn complete_details(
        &mut self,
        ticket: &DetailsTicket,
        outcome: Result<DetailRecord, DetailsError>,
    ) -> Commit {
        if let Err(e) = &outcome {
            if !e.is_expected() {
                warn!(id = %ticket.id, "Details request failed: {e}");
            }
        }

        let commit = self.overlay.resolve(ticket, outcome);
        if !commit.is_applied() {
            debug!(id = %ticket.id, token = %ticket.token, "Dropping superseded details result");
        }
        commit
    }

    /// Closes the overlay. Returns whether anything changed.
    pub fn dismiss_details(&mut self, trigger: DismissTrigger) -> bool {
        self.overlay.dismiss(trigger)
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Current results in the selected order.
    pub fn grid(&self) -> GridView {
        project(&self.session.items, self.sort_order)
    }

    pub fn overlay(&self) -> OverlayView {
        self.overlay.view()
    }

    /// Everything the presentation layer needs to draw the page.
    pub fn view(&self) -> AppView {
        AppView {
            query: self.current_request().0.to_string(),
            status: self.status.text(),
            pager: self.pager(),
            sort_options: SortOrder::ALL
                .into_iter()
                .map(|order| SortOption {
                    value: order.value().to_string(),
                    label: order.label().to_string(),
                    selected: order == self.sort_order,
                })
                .collect(),
            grid: self.grid(),
            overlay: self.overlay(),
        }
    }
}

/// Renderable snapshot of the whole surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppView {
    pub query: String,
    pub status: String,
    pub pager: Pager,
    pub sort_options: Vec<SortOption>,
    pub grid: GridView,
    pub overlay: OverlayView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GatewayError;
    use crate::grid::PosterView;
    use crate::overlay::OverlayContent;
    use crate::types::{MediaType, NOT_AVAILABLE, SearchResultItem};

    fn item(id: &str, title: &str, year: &str) -> SearchResultItem {
        SearchResultItem {
            id: id.to_string(),
            title: title.to_string(),
            year: year.to_string(),
            media_type: MediaType::Movie,
            poster_url: None,
        }
    }

    fn page(total_results: u32, items: Vec<SearchResultItem>) -> Result<SearchPage, SearchError> {
        Ok(SearchPage {
            total_results,
            items,
        })
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let mut app = ReelScout::new();
        assert!(app.submit_query("   ").is_none());
        assert_eq!(app.status(), &StatusLine::Idle);
    }

    #[test]
    fn test_batman_search_renders_single_placeholder_card() {
        let mut app = ReelScout::new();
        let ticket = app.submit_query("  batman ").unwrap();
        assert_eq!(ticket.query, "batman");
        assert_eq!(app.view().status, "Searching...");

        let commit = app.complete_search(
            ticket,
            page(1, vec![item("tt0096895", "Batman", "1989")]),
        );
        assert_eq!(commit, Commit::Applied);

        let view = app.view();
        assert_eq!(view.grid.cards.len(), 1);
        assert!(matches!(
            view.grid.cards[0].poster,
            PosterView::Placeholder { .. }
        ));
        assert!(view.status.contains('1'));
        assert!(view.status.contains("batman"));
        assert!(!view.pager.has_previous);
        assert!(!view.pager.has_next);
    }

    #[test]
    fn test_not_found_empties_results() {
        let mut app = ReelScout::new();
        let ticket = app.submit_query("batman").unwrap();
        app.complete_search(ticket, page(1, vec![item("tt0096895", "Batman", "1989")]));

        let ticket = app.submit_query("qwertyuiop").unwrap();
        app.complete_search(
            ticket,
            Err(GatewayError::NotFound {
                message: "Movie not found!".to_string(),
            }),
        );

        let view = app.view();
        assert_eq!(view.status, "Movie not found!");
        assert!(view.grid.is_empty());
        assert_eq!(app.session().total_results, 0);
        assert_eq!(view.pager.max_page, 1);
    }

    #[test]
    fn test_last_request_wins() {
        let mut app = ReelScout::new();
        let first = app.submit_query("alien").unwrap();
        let second = app.submit_query("batman").unwrap();

        assert_eq!(
            app.complete_search(second, page(1, vec![item("tt2", "Batman", "1989")])),
            Commit::Applied
        );
        assert_eq!(
            app.complete_search(first, page(50, vec![item("tt1", "Alien", "1979")])),
            Commit::Superseded
        );

        assert_eq!(app.session().query, "batman");
        assert_eq!(app.session().items[0].id, "tt2");
        assert!(app.view().status.contains("batman"));
    }

    #[test]
    fn test_superseded_failure_is_dropped() {
        let mut app = ReelScout::new();
        let first = app.submit_query("alien").unwrap();
        let second = app.submit_query("batman").unwrap();
        app.complete_search(second, page(1, vec![item("tt2", "Batman", "1989")]));

        let commit = app.complete_search(
            first,
            Err(GatewayError::Transport {
                reason: "connection reset".to_string(),
            }),
        );
        assert_eq!(commit, Commit::Superseded);
        assert!(!app.view().status.starts_with("Search failed"));
    }

    #[test]
    fn test_paging_follows_pager_rules() {
        let mut app = ReelScout::new();
        assert!(app.next_page().is_none());

        let ticket = app.submit_query("star").unwrap();
        app.complete_search(ticket, page(25, vec![item("tt1", "Star", "1977")]));
        assert!(app.previous_page().is_none());

        let next = app.next_page().unwrap();
        assert_eq!((next.query.as_str(), next.page), ("star", 2));
        app.complete_search(next, page(25, vec![item("tt2", "Star 2", "1980")]));

        let next = app.next_page().unwrap();
        assert_eq!(next.page, 3);
        app.complete_search(next, page(25, vec![item("tt3", "Star 3", "1983")]));
        assert!(app.next_page().is_none());

        let previous = app.previous_page().unwrap();
        assert_eq!(previous.page, 2);
    }

    #[test]
    fn test_next_page_follows_latest_submitted_query() {
        let mut app = ReelScout::new();
        let ticket = app.submit_query("star").unwrap();
        app.complete_search(ticket, page(25, vec![item("tt1", "Star", "1977")]));

        app.submit_query("alien").unwrap();
        let next = app.next_page().unwrap();
        assert_eq!((next.query.as_str(), next.page), ("alien", 2));
        assert_eq!(app.view().query, "alien");
    }

    #[test]
    fn test_repeated_next_while_in_flight_advances() {
        let mut app = ReelScout::new();
        let ticket = app.submit_query("star").unwrap();
        app.complete_search(ticket, page(25, vec![item("tt1", "Star", "1977")]));

        let second = app.next_page().unwrap();
        let third = app.next_page().unwrap();
        assert_eq!((second.page, third.page), (2, 3));
        assert_eq!(app.view().pager.label, "Page 3");
        assert!(app.next_page().is_none());

        assert_eq!(
            app.complete_search(second, page(25, vec![item("tt2", "Star 2", "1980")])),
            Commit::Superseded
        );
        assert_eq!(
            app.complete_search(third, page(25, vec![item("tt3", "Star 3", "1983")])),
            Commit::Applied
        );
        assert_eq!(app.session().page, 3);

        let previous = app.previous_page().unwrap();
        assert_eq!(previous.page, 2);
    }

    #[test]
    fn test_transport_failure_reports_and_keeps_results() {
        let mut app = ReelScout::new();
        let ticket = app.submit_query("star").unwrap();
        app.complete_search(ticket, page(25, vec![item("tt1", "Star", "1977")]));

        let next = app.next_page().unwrap();
        app.complete_search(
            next,
            Err(GatewayError::Transport {
                reason: "dns error".to_string(),
            }),
        );

        let view = app.view();
        assert_eq!(view.status, "Search failed: dns error");
        assert_eq!(view.pager.page, 1);
        assert_eq!(view.grid.cards.len(), 1);

        let retry = app.next_page().unwrap();
        assert_eq!(retry.page, 2);
    }

    #[test]
    fn test_sort_reprojects_without_touching_session() {
        let mut app = ReelScout::new();
        let ticket = app.submit_query("x").unwrap();
        app.complete_search(
            ticket,
            page(
                2,
                vec![item("a", "Older", "1950"), item("b", "Newer", "2020")],
            ),
        );

        app.set_sort(SortOrder::YearDesc);
        let view = app.view();
        assert_eq!(view.grid.cards[0].id, "b");
        assert_eq!(app.session().items[0].id, "a");
        assert!(
            view.sort_options
                .iter()
                .any(|option| option.selected && option.value == "newest")
        );
    }

    #[test]
    fn test_activation_opens_details_for_known_card() {
        let mut app = ReelScout::new();
        let ticket = app.submit_query("batman").unwrap();
        app.complete_search(ticket, page(1, vec![item("tt0096895", "Batman", "1989")]));

        assert!(
            app.activate("tt0096895", &Activation::Key("Tab".to_string()))
                .is_none()
        );
        assert!(app.activate("tt-unknown", &Activation::Pointer).is_none());

        let ticket = app
            .activate("tt0096895", &Activation::Key(" ".to_string()))
            .unwrap();
        assert_eq!(ticket.id, "tt0096895");
        assert!(app.pending_details(ticket.token).is_some());

        let record = DetailRecord {
            id: "tt0096895".to_string(),
            title: "Batman".to_string(),
            year: "1989".to_string(),
            rated: "PG-13".to_string(),
            runtime: "126 min".to_string(),
            genre: "Action, Adventure".to_string(),
            plot: NOT_AVAILABLE.to_string(),
            director: "Tim Burton".to_string(),
            actors: "Michael Keaton".to_string(),
            released: "23 Jun 1989".to_string(),
            awards: NOT_AVAILABLE.to_string(),
            imdb_rating: "7.5".to_string(),
            top_rating: NOT_AVAILABLE.to_string(),
            poster_url: NOT_AVAILABLE.to_string(),
        };
        assert_eq!(app.complete_details(&ticket, Ok(record)), Commit::Applied);

        let Some(OverlayContent::Record(view)) = app.overlay().content else {
            panic!("expected record content");
        };
        assert!(view.chips.contains(&"Top Rating: N/A".to_string()));
        assert!(app.pending_details(ticket.token).is_none());
    }
}
