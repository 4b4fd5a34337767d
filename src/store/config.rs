//! Store configuration and environment variable handling.

use std::env;
use std::path::PathBuf;

/// Default location of the flights document, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/flights.json";

/// Store configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the flights JSON document
    pub data_path: PathBuf,
}

impl StoreConfig {
    /// Create a store configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `FLIGHTS_DATA` (optional, default: `data/flights.json`): path to the
    ///   flights JSON document
    pub fn from_env() -> Self {
        let data_path = env::var("FLIGHTS_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH));
        Self { data_path }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}
