//! Flights data store.
//!
//! This module provides abstractions for loading the flights document via the
//! Repository pattern, allowing different storage backends to be swapped
//! easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, search engine)            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository.rs) - Abstract Interface  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────────┐
//!     │  File Repository  │  Local Repo  │
//!     │  (JSON document)  │  (in-memory) │
//!     └──────────────────────────────────┘
//! ```
//!
//! The module includes:
//! - `repository`: Trait definition for flights access
//! - `repositories::file`: File-backed implementation reading a JSON document
//! - `repositories::local`: In-memory implementation for unit testing and
//!   local development
//! - `config`: Environment-driven store configuration

#[cfg(not(any(feature = "file-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod config;
pub mod error;
pub mod repositories;
pub mod repository;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use repository::FlightsRepository;

#[cfg(feature = "file-repo")]
pub use repositories::FileRepository;
#[cfg(feature = "local-repo")]
pub use repositories::LocalRepository;
