//! Details overlay state machine and its view model.
//!
//! Only the most recently opened id may render. A response for an id that was
//! closed or retargeted before it resolved is dropped on arrival.

use serde::{Deserialize, Serialize};

use crate::errors::{DetailsError, GatewayError};
use crate::grid::PosterView;
use crate::sequencer::{Commit, RequestSequencer, RequestToken};
use crate::types::{DetailRecord, NOT_AVAILABLE, available};

pub const LOADING_MESSAGE: &str = "Loading details…";
pub const DETAILS_FALLBACK_MESSAGE: &str = "Could not load details.";

/// Ticket for one details fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailsTicket {
    pub id: String,
    pub token: RequestToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum OverlayState {
    Closed,
    Loading { ticket: DetailsTicket },
    Loaded(Box<DetailRecord>),
    Failed { message: String },
}

/// What asked the overlay to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissTrigger {
    CloseButton,
    Backdrop,
    /// Click landing on the content panel rather than the backdrop
    ContentPanel,
    Escape,
}

impl DismissTrigger {
    pub fn closes(self) -> bool {
        !matches!(self, DismissTrigger::ContentPanel)
    }
}

impl std::str::FromStr for DismissTrigger {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "close" | "close_button" => Ok(Self::CloseButton),
            "backdrop" => Ok(Self::Backdrop),
            "panel" | "content_panel" => Ok(Self::ContentPanel),
            "escape" | "esc" => Ok(Self::Escape),
            _ => Err(format!("Invalid dismiss trigger: '{s}'")),
        }
    }
}

/// Modal showing one title's full record.
#[derive(Debug)]
pub struct DetailsOverlay {
    state: OverlayState,
    sequencer: RequestSequencer,
}

impl Default for DetailsOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailsOverlay {
    pub fn new() -> Self {
        Self {
            state: OverlayState::Closed,
            sequencer: RequestSequencer::new(),
        }
    }

    /// Shows the loading state for `id` and returns the ticket to fetch with.
    ///
    /// Any fetch already in flight is superseded. Blank ids are ignored.
    pub fn open(&mut self, id: &str) -> Option<DetailsTicket> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }

        let ticket = DetailsTicket {
            id: id.to_string(),
            token: self.sequencer.issue(),
        };
        self.state = OverlayState::Loading {
            ticket: ticket.clone(),
        };
        Some(ticket)
    }

    /// Commits a fetch outcome if `ticket` is still the one being shown.
    pub fn resolve(
        &mut self,
        ticket: &DetailsTicket,
        outcome: Result<DetailRecord, DetailsError>,
    ) -> Commit {
        if self.pending_ticket(ticket.token) != Some(ticket) {
            return Commit::Superseded;
        }

        self.state = match outcome {
            Ok(record) => OverlayState::Loaded(Box::new(record)),
            Err(e) => OverlayState::Failed {
                message: failure_message(&e),
            },
        };
        Commit::Applied
    }

    /// Ticket of the fetch currently shown as loading.
    pub fn loading_ticket(&self) -> Option<&DetailsTicket> {
        match &self.state {
            OverlayState::Loading { ticket } => Some(ticket),
            _ => None,
        }
    }

    /// Ticket currently loading, if it carries `token`.
    pub fn pending_ticket(&self, token: RequestToken) -> Option<&DetailsTicket> {
        match &self.state {
            OverlayState::Loading { ticket }
                if ticket.token == token && self.sequencer.is_latest(token) =>
            {
                Some(ticket)
            }
            _ => None,
        }
    }

    /// Hides the overlay and drops its content. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.sequencer.invalidate();
        self.state = OverlayState::Closed;
        true
    }

    /// Closes for any trigger except a click on the content panel.
    pub fn dismiss(&mut self, trigger: DismissTrigger) -> bool {
        trigger.closes() && self.close()
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, OverlayState::Closed)
    }

    pub fn view(&self) -> OverlayView {
        let content = match &self.state {
            OverlayState::Closed => None,
            OverlayState::Loading { .. } => Some(OverlayContent::Loading {
                text: LOADING_MESSAGE.to_string(),
            }),
            OverlayState::Loaded(record) => {
                Some(OverlayContent::Record(DetailView::from_record(record)))
            }
            OverlayState::Failed { message } => Some(OverlayContent::Message {
                text: message.clone(),
            }),
        };

        OverlayView {
            visible: content.is_some(),
            scroll_locked: content.is_some(),
            content,
        }
    }
}

fn failure_message(error: &GatewayError) -> String {
    match error {
        GatewayError::NotFound { message } => message.clone(),
        other => format!("Error loading details. ({other})"),
    }
}

/// Renderable overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayView {
    pub visible: bool,
    /// Background scrolling is disabled while the overlay is shown
    pub scroll_locked: bool,
    pub content: Option<OverlayContent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OverlayContent {
    Loading { text: String },
    Record(DetailView),
    Message { text: String },
}

/// Display-ready details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailView {
    pub title: String,
    pub subtitle: String,
    pub chips: Vec<String>,
    pub plot: String,
    pub facts: Vec<(String, String)>,
    pub poster: PosterView,
}

impl DetailView {
    pub fn from_record(record: &DetailRecord) -> Self {
        let rated = available(&record.rated).unwrap_or("NR");
        let plot = available(&record.plot).unwrap_or("No plot available.");

        Self {
            title: record.title.clone(),
            subtitle: format!("{} • {} • {}", record.year, rated, record.runtime),
            chips: vec![
                record.genre.clone(),
                format!("IMDb: {}", record.imdb_rating),
                format!("Top Rating: {}", record.top_rating),
            ],
            plot: plot.to_string(),
            facts: [
                ("Director", &record.director),
                ("Actors", &record.actors),
                ("Released", &record.released),
                ("Awards", &record.awards),
                ("IMDb ID", &record.id),
            ]
            .into_iter()
            .map(|(label, value)| {
                let value = if value.trim().is_empty() {
                    NOT_AVAILABLE
                } else {
                    value.as_str()
                };
                (label.to_string(), value.to_string())
            })
            .collect(),
            poster: PosterView::for_title(record.poster(), &record.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str) -> DetailRecord {
        DetailRecord {
            id: id.to_string(),
            title: title.to_string(),
            year: "1999".to_string(),
            rated: "R".to_string(),
            runtime: "136 min".to_string(),
            genre: "Action, Sci-Fi".to_string(),
            plot: "A hacker learns the truth.".to_string(),
            director: "Lana Wachowski, Lilly Wachowski".to_string(),
            actors: "Keanu Reeves".to_string(),
            released: "31 Mar 1999".to_string(),
            awards: "Won 4 Oscars".to_string(),
            imdb_rating: "8.7".to_string(),
            top_rating: "8.7/10".to_string(),
            poster_url: NOT_AVAILABLE.to_string(),
        }
    }

    #[test]
    fn test_open_shows_loading_before_resolution() {
        let mut overlay = DetailsOverlay::new();
        overlay.open("tt0133093").unwrap();

        let view = overlay.view();
        assert!(view.visible);
        assert!(view.scroll_locked);
        assert_eq!(
            view.content,
            Some(OverlayContent::Loading {
                text: LOADING_MESSAGE.to_string()
            })
        );
    }

    #[test]
    fn test_resolve_renders_record() {
        let mut overlay = DetailsOverlay::new();
        let ticket = overlay.open("tt0133093").unwrap();

        let commit = overlay.resolve(&ticket, Ok(record("tt0133093", "The Matrix")));
        assert_eq!(commit, Commit::Applied);

        let Some(OverlayContent::Record(view)) = overlay.view().content else {
            panic!("expected record content");
        };
        assert_eq!(view.title, "The Matrix");
        assert_eq!(view.subtitle, "1999 • R • 136 min");
        assert!(view.chips.contains(&"Top Rating: 8.7/10".to_string()));
        assert!(view.poster.is_placeholder());
    }

    #[test]
    fn test_retarget_discards_earlier_response() {
        let mut overlay = DetailsOverlay::new();
        let first = overlay.open("tt0000001").unwrap();
        let second = overlay.open("tt0000002").unwrap();

        assert_eq!(
            overlay.resolve(&first, Ok(record("tt0000001", "First"))),
            Commit::Superseded
        );
        assert!(matches!(
            overlay.view().content,
            Some(OverlayContent::Loading { .. })
        ));

        assert_eq!(
            overlay.resolve(&second, Ok(record("tt0000002", "Second"))),
            Commit::Applied
        );
    }

    #[test]
    fn test_close_then_reopen_never_shows_previous_content() {
        let mut overlay = DetailsOverlay::new();
        let first = overlay.open("tt0000001").unwrap();
        overlay.resolve(&first, Ok(record("tt0000001", "First")));

        assert!(overlay.close());
        assert_eq!(overlay.view().content, None);

        let second = overlay.open("tt0000002").unwrap();
        assert!(matches!(
            overlay.view().content,
            Some(OverlayContent::Loading { .. })
        ));

        // A late response for the closed id must not land either.
        assert_eq!(
            overlay.resolve(&first, Ok(record("tt0000001", "First"))),
            Commit::Superseded
        );
        overlay.resolve(&second, Ok(record("tt0000002", "Second")));
        let Some(OverlayContent::Record(view)) = overlay.view().content else {
            panic!("expected record content");
        };
        assert_eq!(view.title, "Second");
    }

    #[test]
    fn test_response_after_close_is_dropped() {
        let mut overlay = DetailsOverlay::new();
        let ticket = overlay.open("tt0000001").unwrap();
        overlay.dismiss(DismissTrigger::Escape);

        assert_eq!(
            overlay.resolve(&ticket, Ok(record("tt0000001", "First"))),
            Commit::Superseded
        );
        assert!(!overlay.view().visible);
    }

    #[test]
    fn test_dismiss_triggers_are_idempotent() {
        let mut overlay = DetailsOverlay::new();
        overlay.open("tt0000001");

        assert!(!overlay.dismiss(DismissTrigger::ContentPanel));
        assert!(overlay.is_open());
        assert!(overlay.dismiss(DismissTrigger::Backdrop));
        assert!(!overlay.dismiss(DismissTrigger::CloseButton));
        assert!(!overlay.dismiss(DismissTrigger::Escape));
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_failure_messages() {
        let mut overlay = DetailsOverlay::new();
        let ticket = overlay.open("tt404").unwrap();
        overlay.resolve(
            &ticket,
            Err(GatewayError::NotFound {
                message: "Incorrect IMDb ID.".to_string(),
            }),
        );
        assert_eq!(
            overlay.view().content,
            Some(OverlayContent::Message {
                text: "Incorrect IMDb ID.".to_string()
            })
        );

        let ticket = overlay.open("tt500").unwrap();
        overlay.resolve(&ticket, Err(GatewayError::Http { status: 500 }));
        assert_eq!(
            overlay.view().content,
            Some(OverlayContent::Message {
                text: "Error loading details. (HTTP 500)".to_string()
            })
        );
    }

    #[test]
    fn test_blank_id_is_ignored() {
        let mut overlay = DetailsOverlay::new();
        assert!(overlay.open("  ").is_none());
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_missing_fields_fall_back_for_display() {
        let mut sparse = record("tt1", "Sparse");
        sparse.rated = NOT_AVAILABLE.to_string();
        sparse.plot = NOT_AVAILABLE.to_string();

        let view = DetailView::from_record(&sparse);
        assert_eq!(view.subtitle, "1999 • NR • 136 min");
        assert_eq!(view.plot, "No plot available.");
    }
}
