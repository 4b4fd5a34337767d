//! HTTP server module for the flights backend.
//!
//! This module provides an axum-based HTTP server that exposes the flights
//! document as a small REST API. It reuses the store layer's repository
//! pattern; the search engine stays client-side and is not served over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Store Layer (store/)                                     │
//! │  - FileRepository / LocalRepository                       │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
