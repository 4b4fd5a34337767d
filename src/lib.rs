//! # Flights Rust Backend
//!
//! Backend and search engine for an airport flight-information web application.
//!
//! This crate serves a static JSON document of flight records over a small REST
//! API (via Axum) and provides the client-facing search engine: a debounced
//! filter/sort/group routine over the in-memory flight list.
//!
//! ## Features
//!
//! - **Data Loading**: Read the flights document from a JSON file, with a
//!   distinct "not found" error for a missing file
//! - **Search**: Substring filtering over airport names and
//!   whitespace-insensitive flight numbers
//! - **Sorting & Grouping**: Stable date / expected-time ordering with optional
//!   per-date grouping of the results
//! - **Debouncing**: Cancellable-timer driver that collapses bursts of input
//!   into a single computation
//! - **HTTP API**: RESTful endpoint for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: The `Flight` record and the wire/document shapes
//! - [`store`]: Repository pattern for loading the flights document
//! - [`search`]: Pure search/sort/group engine and its debounced driver
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod models;

pub mod search;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
