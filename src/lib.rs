//! `AirSuggest` - location-aware airport autocomplete
//!
//! This library provides the core functionality for turning a free-text
//! query into ranked, grouped airport suggestions over an in-memory
//! catalog of airports and the locations that contain them.

pub mod catalog;
pub mod error;
pub mod loader;
pub mod models;
pub mod normalize;
pub mod suggest;

// Re-export core types for public API
pub use catalog::Catalog;
pub use error::CatalogError;
pub use loader::CatalogLoader;
pub use models::{Airport, AirportRecord, Location, LocationKey, LocationRecord};
pub use normalize::normalize;
pub use suggest::{DisplayCategory, SearchField, Section, Suggestion, suggest};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, CatalogError>;
