//! Flights HTTP Server Binary
//!
//! This is the main entry point for the flights REST API server.
//! It initializes the repository, sets up the HTTP router, and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin flights-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 3000)
//! - `FLIGHTS_DATA`: Path to the flights JSON document (default: data/flights.json)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use flights_rust::http::{create_router, AppState};
use flights_rust::store::{FileRepository, StoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging, honoring RUST_LOG directives
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting flights HTTP server");

    let config = StoreConfig::from_env();
    info!("Serving flights from {}", config.data_path.display());
    let repository = Arc::new(FileRepository::new(config.data_path));

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
