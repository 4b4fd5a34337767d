//! In-memory repository for unit testing and local development.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::models::Flight;
use crate::store::error::{StoreError, StoreResult};
use crate::store::repository::FlightsRepository;

/// In-memory implementation of [`FlightsRepository`].
///
/// Holds a flight list behind a lock so tests can seed data, and can simulate
/// a missing data source via [`LocalRepository::set_missing`].
#[derive(Debug, Default)]
pub struct LocalRepository {
    flights: RwLock<Vec<Flight>>,
    missing: RwLock<bool>,
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-seeded with flights.
    pub fn with_flights(flights: Vec<Flight>) -> Self {
        Self {
            flights: RwLock::new(flights),
            missing: RwLock::new(false),
        }
    }

    /// Replace the stored flight list.
    pub fn set_flights(&self, flights: Vec<Flight>) {
        *self.flights.write() = flights;
    }

    /// Simulate a missing data source; subsequent fetches fail with
    /// [`StoreError::NotFound`].
    pub fn set_missing(&self, missing: bool) {
        *self.missing.write() = missing;
    }
}

#[async_trait]
impl FlightsRepository for LocalRepository {
    async fn fetch_flights(&self) -> StoreResult<Vec<Flight>> {
        if *self.missing.read() {
            return Err(StoreError::NotFound {
                path: "<in-memory>".to_string(),
            });
        }
        Ok(self.flights.read().clone())
    }

    async fn health_check(&self) -> StoreResult<bool> {
        Ok(!*self.missing.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(id: &str) -> Flight {
        Flight {
            flight_identifier: id.to_string(),
            flight_number: "KL 123".to_string(),
            airport: "London Heathrow".to_string(),
            date: "2022-11-27".to_string(),
            expected_time: "10:00".to_string(),
            original_time: "10:00".to_string(),
            url: format!("/flight/{id}/"),
            score: "50.0".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_returns_seeded_flights() {
        let repo = LocalRepository::with_flights(vec![flight("a"), flight("b")]);
        let flights = repo.fetch_flights().await.unwrap();
        assert_eq!(flights.len(), 2);
        assert_eq!(flights[0].flight_identifier, "a");
    }

    #[tokio::test]
    async fn test_missing_source_is_not_found() {
        let repo = LocalRepository::new();
        repo.set_missing(true);
        assert!(repo.fetch_flights().await.unwrap_err().is_not_found());
        assert!(!repo.health_check().await.unwrap());
    }
}
