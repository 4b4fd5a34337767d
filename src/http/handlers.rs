//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the store
//! layer for data access.

use axum::{extract::State, Json};

use super::dto::{FlightsResponse, HealthResponse};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running and the data store
/// is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store_status = match state.repository.health_check().await {
        Ok(true) => "available".to_string(),
        Ok(false) => "unavailable".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        store: store_status,
    }))
}

/// GET /api/flights
///
/// Return the full flights document. A missing data source yields 404 with a
/// distinct error body; any other read or parse failure yields 500.
pub async fn get_flights(State(state): State<AppState>) -> HandlerResult<FlightsResponse> {
    let flights = state.repository.fetch_flights().await?;
    Ok(Json(FlightsResponse { flights }))
}
