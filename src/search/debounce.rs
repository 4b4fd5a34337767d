//! Debounced driver for the search engine.
//!
//! User input arrives as a burst of keystrokes; recomputing the search on
//! every one is wasted work. [`FlightSearch`] wraps the pure engine in an
//! explicit cancellable timer: each accepted request cancels the previous
//! pending timer and starts a new one, so at most one computation is pending
//! per burst and only the result for the latest `(query, sort_by)` pair is
//! ever published.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::{search, SearchResult, SortBy, DEBOUNCE_DELAY, MIN_QUERY_LENGTH};
use crate::models::Flight;

/// Debounced search over one read-only flight snapshot.
///
/// Holds the full flight list for the lifetime of a page load and publishes
/// results on a [`watch`] channel, so renderers always observe the most
/// recently computed value (last write wins). Cancelling a pending timer
/// before it fires has no observable effect.
pub struct FlightSearch {
    flights: Arc<[Flight]>,
    delay: Duration,
    /// Bumped on every request; a timer only publishes if its generation is
    /// still current when it fires.
    generation: Arc<AtomicU64>,
    pending: Mutex<Option<JoinHandle<()>>>,
    tx: watch::Sender<SearchResult>,
}

impl FlightSearch {
    /// Create a driver over `flights` with the default debounce delay.
    pub fn new(flights: Vec<Flight>) -> Self {
        Self::with_delay(flights, DEBOUNCE_DELAY)
    }

    /// Create a driver with an explicit debounce delay.
    pub fn with_delay(flights: Vec<Flight>, delay: Duration) -> Self {
        let (tx, _rx) = watch::channel(SearchResult::default());
        Self {
            flights: flights.into(),
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
            tx,
        }
    }

    /// Subscribe to search results. The receiver starts at the empty result
    /// and is updated whenever a search completes or the results are cleared.
    pub fn results(&self) -> watch::Receiver<SearchResult> {
        self.tx.subscribe()
    }

    /// The most recently published result.
    pub fn latest(&self) -> SearchResult {
        self.tx.borrow().clone()
    }

    /// Request a search for `(query, sort_by)`.
    ///
    /// Queries shorter than [`MIN_QUERY_LENGTH`] clear the results
    /// synchronously, without debouncing. Longer queries start the debounce
    /// timer, superseding any pending request.
    pub fn request(&self, query: &str, sort_by: SortBy) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.cancel_pending();

        if query.chars().count() < MIN_QUERY_LENGTH {
            self.tx.send_replace(SearchResult::default());
            return;
        }

        let flights = Arc::clone(&self.flights);
        let current = Arc::clone(&self.generation);
        let tx = self.tx.clone();
        let query = query.to_string();
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let result = search(&flights, &query, sort_by);
            // A newer request may have arrived while we were computing;
            // publishing a stale result would violate last-write-wins. The
            // generation check runs inside the channel's own lock so no
            // request can slip between the check and the publish.
            tx.send_if_modified(|value| {
                if current.load(Ordering::SeqCst) == generation {
                    *value = result;
                    true
                } else {
                    false
                }
            });
        });

        *self.pending.lock() = Some(handle);
    }

    /// Cancel any pending timer. Idempotent; has no effect on published
    /// results.
    pub fn cancel_pending(&self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }
}

impl Drop for FlightSearch {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
