//! Application state for the HTTP server.

use std::sync::Arc;

use crate::store::FlightsRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for flights access
    pub repository: Arc<dyn FlightsRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn FlightsRepository>) -> Self {
        Self { repository }
    }
}
