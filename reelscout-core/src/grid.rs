//! Grid view model: one activatable card per result.

use serde::{Deserialize, Serialize};

use crate::sort::{SortOrder, sort_items};
use crate::types::{SearchResultItem, available};

/// Poster slot of a card or of the details view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PosterView {
    Image { url: String, alt: String },
    Placeholder { label: String },
}

impl PosterView {
    /// Image when `url` is real artwork, placeholder otherwise.
    pub fn for_title(url: Option<&str>, title: &str) -> Self {
        match url.and_then(available) {
            Some(url) => PosterView::Image {
                url: url.to_string(),
                alt: format!("{title} poster"),
            },
            None => PosterView::Placeholder {
                label: "No poster available".to_string(),
            },
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, PosterView::Placeholder { .. })
    }
}

/// One card in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCard {
    pub id: String,
    pub title: String,
    /// Type badge text
    pub badge: String,
    pub year: String,
    pub poster: PosterView,
    pub aria_label: String,
}

impl GridCard {
    pub fn from_item(item: &SearchResultItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            badge: item.media_type.to_string(),
            year: item.year.clone(),
            poster: PosterView::for_title(item.poster_url.as_deref(), &item.title),
            aria_label: format!("Open details for {}", item.title),
        }
    }

    /// Id to open when the card receives `activation`, if it activates.
    pub fn activate(&self, activation: &Activation) -> Option<&str> {
        (activation.opens_details() && !self.id.trim().is_empty()).then_some(self.id.as_str())
    }
}

/// Renderable grid. Empty results give an empty grid, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridView {
    pub cards: Vec<GridCard>,
}

impl GridView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, id: &str) -> Option<&GridCard> {
        self.cards.iter().find(|card| card.id == id)
    }
}

/// Projects items in their given order.
pub fn render(items: &[SearchResultItem]) -> GridView {
    GridView {
        cards: items.iter().map(GridCard::from_item).collect(),
    }
}

/// Projects items in `order` without touching the source slice.
pub fn project(items: &[SearchResultItem], order: SortOrder) -> GridView {
    render(&sort_items(items, order))
}

/// How a card was activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    Pointer,
    /// Keyboard event carrying a DOM key name
    Key(String),
}

impl Activation {
    /// Builds an activation from an optional key name; no key means a pointer.
    pub fn from_key_name(key: Option<&str>) -> Self {
        match key {
            Some(key) if !key.is_empty() => Activation::Key(key.to_string()),
            _ => Activation::Pointer,
        }
    }

    /// Pointer, the confirm key and the space key all open details.
    pub fn opens_details(&self) -> bool {
        match self {
            Activation::Pointer => true,
            Activation::Key(key) => matches!(key.as_str(), "Enter" | " " | "Space" | "Spacebar"),
        }
    }
}
