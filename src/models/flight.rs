//! The flight record and the shape of the flights document.
//!
//! Field names on the wire are camelCase, matching the JSON document served by
//! the API and consumed by the frontend. A `Flight` is immutable once loaded:
//! the search engine only ever produces derived views (filtered lists, grouped
//! maps), never edits a record in place.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Wire format of the flight date (ISO calendar date).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format of the expected/original times.
pub const TIME_FORMAT: &str = "%H:%M";

/// One scheduled arrival/departure with identifying and timing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    /// Unique identifier within a loaded document.
    pub flight_identifier: String,
    /// Flight number as published; may contain internal whitespace ("KL 123").
    pub flight_number: String,
    /// Destination/origin airport name.
    pub airport: String,
    /// Calendar date, ISO-formatted (`YYYY-MM-DD`).
    pub date: String,
    /// Expected time, `HH:MM`.
    pub expected_time: String,
    /// Originally scheduled time, `HH:MM`.
    pub original_time: String,
    /// Detail-page URL.
    pub url: String,
    /// Relevance score; carried through unchanged, unused by filtering.
    pub score: String,
}

impl Flight {
    /// Parse the flight's calendar date, if well-formed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Parse the combined date + expected time, if both are well-formed.
    pub fn parsed_expected_datetime(&self) -> Option<NaiveDateTime> {
        let date = self.parsed_date()?;
        let time = NaiveTime::parse_from_str(&self.expected_time, TIME_FORMAT).ok()?;
        Some(date.and_time(time))
    }
}

/// The flights document as stored on disk and served at `/api/flights`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightsDocument {
    /// Full ordered list of flights for one page load.
    pub flights: Vec<Flight>,
}
