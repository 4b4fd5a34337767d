//! Core data types shared across the store, search, and HTTP layers.

pub mod flight;

pub use flight::{Flight, FlightsDocument};
