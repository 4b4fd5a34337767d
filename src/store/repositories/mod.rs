//! Repository implementations module.
//!
//! This module contains different implementations of the `FlightsRepository`
//! trait:
//! - `file`: File-backed implementation reading a JSON document from disk
//! - `local`: In-memory implementation for unit testing and local development

#[cfg(feature = "file-repo")]
pub mod file;
#[cfg(feature = "local-repo")]
pub mod local;

#[cfg(feature = "file-repo")]
pub use file::FileRepository;
#[cfg(feature = "local-repo")]
pub use local::LocalRepository;
