//! Error types for store operations.
//!
//! The taxonomy matters at the HTTP boundary: a missing data source is a
//! distinct user-visible state from any other read or parse failure.

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The flights data source does not exist. Maps to a "no data available"
    /// state (HTTP 404) rather than a generic failure.
    #[error("Flights data source not found: {path}")]
    NotFound { path: String },

    /// Any I/O failure other than a missing source.
    #[error("Failed to read flights data from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document was read but could not be parsed as a flights document.
    #[error("Failed to parse flights data from {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Whether this error is the distinct "data source not found" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
