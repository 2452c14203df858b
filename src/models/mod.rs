//! Data models for the autocomplete catalog
//!
//! This module contains the core domain models organized by concern:
//! - Location: a city/state/country entry with its display and search keys
//! - Airport: an IATA-coded airport belonging to exactly one location

pub mod airport;
pub mod location;

// Re-export all public types for convenient access
pub use airport::{Airport, AirportRecord};
pub use location::{Location, LocationKey, LocationRecord};
