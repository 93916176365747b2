//! Client-side ordering of a result page.
//!
//! Sorting is a pure projection: it copies the items and never touches the
//! session. All orders are stable.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::SearchResultItem;

static YEAR_TOKEN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d+").ok());

/// Order selected in the sort control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Order returned by the service
    #[default]
    Default,
    #[serde(rename = "az")]
    TitleAsc,
    #[serde(rename = "za")]
    TitleDesc,
    #[serde(rename = "newest")]
    YearDesc,
    #[serde(rename = "oldest")]
    YearAsc,
}

impl SortOrder {
    /// All orders in selector order.
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Default,
        SortOrder::TitleAsc,
        SortOrder::TitleDesc,
        SortOrder::YearDesc,
        SortOrder::YearAsc,
    ];

    /// Selector value.
    pub fn value(self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::TitleAsc => "az",
            SortOrder::TitleDesc => "za",
            SortOrder::YearDesc => "newest",
            SortOrder::YearAsc => "oldest",
        }
    }

    /// Human label for the selector.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Default => "Relevance",
            SortOrder::TitleAsc => "Title (A-Z)",
            SortOrder::TitleDesc => "Title (Z-A)",
            SortOrder::YearDesc => "Newest first",
            SortOrder::YearAsc => "Oldest first",
        }
    }

    /// Parses a selector value, falling back to the service order.
    pub fn from_value_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.value() == s.trim().to_lowercase())
            .ok_or_else(|| format!("Invalid sort order: '{s}'"))
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value())
    }
}

/// Returns a reordered copy of `items`.
pub fn sort_items(items: &[SearchResultItem], order: SortOrder) -> Vec<SearchResultItem> {
    let mut sorted = items.to_vec();
    match order {
        SortOrder::Default => {}
        SortOrder::TitleAsc => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortOrder::TitleDesc => sorted.sort_by(|a, b| compare_titles(&b.title, &a.title)),
        SortOrder::YearDesc => sorted.sort_by(|a, b| {
            compare_years(leading_year(&a.year), leading_year(&b.year), Ordering::reverse)
        }),
        SortOrder::YearAsc => sorted.sort_by(|a, b| {
            compare_years(leading_year(&a.year), leading_year(&b.year), |order| order)
        }),
    }
    sorted
}

/// First integer token of a year string ("2001–2006" -> 2001).
pub fn leading_year(year: &str) -> Option<u32> {
    YEAR_TOKEN
        .as_ref()?
        .find(year)
        .and_then(|token| token.as_str().parse().ok())
}

/// Case-insensitive comparison, falling back to the raw text on ties.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Numeric comparison with `direction` applied to year pairs only; titles
/// without a year go last either way.
fn compare_years(
    a: Option<u32>,
    b: Option<u32>,
    direction: impl Fn(Ordering) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction(a.cmp(&b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::types::MediaType;

    fn item(id: &str, title: &str, year: &str) -> SearchResultItem {
        SearchResultItem {
            id: id.to_string(),
            title: title.to_string(),
            year: year.to_string(),
            media_type: MediaType::Movie,
            poster_url: None,
        }
    }

    fn ids(items: &[SearchResultItem]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn test_leading_year() {
        assert_eq!(leading_year("1989"), Some(1989));
        assert_eq!(leading_year("2001–2006"), Some(2001));
        assert_eq!(leading_year("2019–"), Some(2019));
        assert_eq!(leading_year("N/A"), None);
    }

    #[test]
    fn test_title_orders_ignore_case() {
        let items = vec![
            item("1", "batman", "1989"),
            item("2", "Alien", "1979"),
            item("3", "Casablanca", "1942"),
        ];

        assert_eq!(ids(&sort_items(&items, SortOrder::TitleAsc)), ["2", "1", "3"]);
        assert_eq!(ids(&sort_items(&items, SortOrder::TitleDesc)), ["3", "1", "2"]);
    }

    #[test]
    fn test_year_orders_are_stable_on_ties() {
        let items = vec![
            item("a", "One", "2001"),
            item("b", "Two", "1999"),
            item("c", "Three", "2001–2006"),
            item("d", "Four", "N/A"),
        ];

        assert_eq!(
            ids(&sort_items(&items, SortOrder::YearDesc)),
            ["a", "c", "b", "d"]
        );
        assert_eq!(
            ids(&sort_items(&items, SortOrder::YearAsc)),
            ["b", "a", "c", "d"]
        );
    }

    #[test]
    fn test_missing_year_goes_last_when_newest_first() {
        let items = vec![
            item("a", "One", "2001"),
            item("d", "Four", "N/A"),
            item("b", "Two", "1999"),
        ];

        assert_eq!(ids(&sort_items(&items, SortOrder::YearDesc)), ["a", "b", "d"]);
        assert_eq!(ids(&sort_items(&items, SortOrder::YearAsc)), ["b", "a", "d"]);
    }

    #[test]
    fn test_default_keeps_service_order() {
        let items = vec![item("z", "Zed", "2020"), item("a", "Able", "1950")];
        assert_eq!(ids(&sort_items(&items, SortOrder::Default)), ["z", "a"]);
    }

    #[test]
    fn test_sort_order_values() {
        assert_eq!("newest".parse::<SortOrder>(), Ok(SortOrder::YearDesc));
        assert_eq!(SortOrder::from_value_or_default("bogus"), SortOrder::Default);
        for order in SortOrder::ALL {
            assert_eq!(order.value().parse::<SortOrder>(), Ok(order));
        }
    }

    proptest! {
        #[test]
        fn sorting_twice_equals_sorting_once(
            entries in prop::collection::vec(("[A-Za-z ]{0,8}", "(19|20)[0-9]{2}|N/A"), 0..12),
            order_index in 0usize..5,
        ) {
            let items: Vec<SearchResultItem> = entries
                .iter()
                .enumerate()
                .map(|(index, (title, year))| item(&index.to_string(), title, year))
                .collect();
            let order = SortOrder::ALL[order_index];

            let once = sort_items(&items, order);
            let twice = sort_items(&once, order);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn equal_years_keep_relative_order(count in 1usize..10, year in 1900u32..2030) {
            let items: Vec<SearchResultItem> = (0..count)
                .map(|index| item(&index.to_string(), "Same", &year.to_string()))
                .collect();

            for order in [SortOrder::YearDesc, SortOrder::YearAsc] {
                let sorted = sort_items(&items, order);
                prop_assert_eq!(ids(&sorted), ids(&items));
            }
        }

        #[test]
        fn yearless_titles_trail_in_both_directions(
            years in prop::collection::vec("(19|20)[0-9]{2}|N/A", 0..12),
        ) {
            let items: Vec<SearchResultItem> = years
                .iter()
                .enumerate()
                .map(|(index, year)| item(&index.to_string(), "Title", year))
                .collect();

            for order in [SortOrder::YearDesc, SortOrder::YearAsc] {
                let sorted = sort_items(&items, order);
                let first_missing = sorted
                    .iter()
                    .position(|entry| leading_year(&entry.year).is_none())
                    .unwrap_or(sorted.len());
                prop_assert!(sorted[first_missing..]
                    .iter()
                    .all(|entry| leading_year(&entry.year).is_none()));
            }
        }
    }
}
