//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::models::Flight;

/// Response body for `GET /api/flights`.
///
/// Matches the on-disk document shape, so the endpoint is a faithful
/// passthrough of `data/flights.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightsResponse {
    /// Full ordered flight list
    pub flights: Vec<Flight>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    /// Data store status
    pub store: String,
}
