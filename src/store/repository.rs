//! Repository trait for flights access.

use async_trait::async_trait;

use crate::models::Flight;
use crate::store::error::StoreResult;

/// Read-only access to the flights document.
///
/// One successful fetch returns the full ordered flight list for a page load;
/// there are no incremental updates. Implementations must translate a missing
/// data source into [`StoreError::NotFound`](crate::store::StoreError::NotFound)
/// so callers can distinguish it from generic failures.
#[async_trait]
pub trait FlightsRepository: Send + Sync {
    /// Fetch the full ordered flight list.
    async fn fetch_flights(&self) -> StoreResult<Vec<Flight>>;

    /// Check whether the data source is currently readable.
    async fn health_check(&self) -> StoreResult<bool> {
        self.fetch_flights().await.map(|_| true)
    }
}
