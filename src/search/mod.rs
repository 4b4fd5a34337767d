//! Search/sort/group engine for the flight list.
//!
//! The engine is a pure function over an in-memory flight list: it filters by
//! a text query, sorts the matches, and (for date ordering) partitions them
//! into per-date groups. It holds no state and performs no I/O; the debounced
//! driver that throttles keystroke bursts lives in [`debounce`].
//!
//! Matching is substring-based and case-insensitive. Airport names are
//! compared after trimming; flight numbers are compared with all internal
//! whitespace removed on both sides, so "BA123" and "BA 123" are the same
//! query.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::Flight;

pub mod debounce;

pub use debounce::FlightSearch;

/// Minimum query length before any filtering is attempted. Shorter queries
/// clear the results synchronously so the UI can show a hint without delay.
pub const MIN_QUERY_LENGTH: usize = 3;

/// Quiet period that must elapse after the last input change before a search
/// is computed.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(150);

/// Sort mode for search results.
///
/// A closed enum: there is no unrecognized-field fallback, so every search is
/// always sorted one way or the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    /// Ascending by calendar date only; ties keep input order.
    #[default]
    #[serde(rename = "date")]
    ByDate,
    /// Ascending by the combined date + expected time; ties keep input order.
    #[serde(rename = "expectedTime")]
    ByExpectedTime,
}

/// Outcome of one search: the flat sorted match list, and — only for
/// [`SortBy::ByDate`] — the same matches partitioned by calendar-date key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResult {
    /// Filtered and sorted matches.
    pub flights: Vec<Flight>,
    /// Matches keyed by their `YYYY-MM-DD` date string, each group in flat-list
    /// order. Empty when sorting by expected time.
    pub by_date: BTreeMap<String, Vec<Flight>>,
}

impl SearchResult {
    /// True when no flight matched (or the query was below the threshold).
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

/// Filter, sort, and group `flights` for `query`.
///
/// The caller is responsible for the minimum-length precondition; this
/// function filters whatever query it is given (an empty query matches every
/// flight). Flights with unparseable dates or times sort after all parseable
/// ones, stably, and still appear in the grouping under their raw date string.
pub fn search(flights: &[Flight], query: &str, sort_by: SortBy) -> SearchResult {
    let airport_query = query.trim().to_lowercase();
    let number_query = strip_whitespace(query).to_lowercase();

    let mut matches: Vec<Flight> = flights
        .iter()
        .filter(|flight| matches_query(flight, &airport_query, &number_query))
        .cloned()
        .collect();

    // Vec::sort_by_key is stable; ties keep input order as required.
    match sort_by {
        SortBy::ByDate => {
            matches.sort_by_key(|flight| {
                let date = flight.parsed_date();
                (date.is_none(), date)
            });
        }
        SortBy::ByExpectedTime => {
            matches.sort_by_key(|flight| {
                let datetime = flight.parsed_expected_datetime();
                (datetime.is_none(), datetime)
            });
        }
    }

    let by_date = match sort_by {
        SortBy::ByDate => group_by_date(&matches),
        SortBy::ByExpectedTime => BTreeMap::new(),
    };

    SearchResult {
        flights: matches,
        by_date,
    }
}

fn matches_query(flight: &Flight, airport_query: &str, number_query: &str) -> bool {
    flight.airport.to_lowercase().contains(airport_query)
        || strip_whitespace(&flight.flight_number)
            .to_lowercase()
            .contains(number_query)
}

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

fn group_by_date(flights: &[Flight]) -> BTreeMap<String, Vec<Flight>> {
    let mut groups: BTreeMap<String, Vec<Flight>> = BTreeMap::new();
    for flight in flights {
        groups
            .entry(flight.date.clone())
            .or_default()
            .push(flight.clone());
    }
    groups
}
