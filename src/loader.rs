//! Catalog Loading Module
//!
//! This module handles loading location and airport rows from a catalog
//! file and building the immutable [`Catalog`] the suggestion engine reads.
//! Loading runs once at startup, before any request is served.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::models::{AirportRecord, LocationRecord};

/// On-disk catalog file shape: location rows and airport rows side by side
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub locations: Vec<LocationRecord>,
    pub airports: Vec<AirportRecord>,
}

/// Service for loading the airport catalog
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and build a catalog from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog> {
        let path = path.as_ref();
        info!("Loading airport catalog from {}", path.display());

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;

        Self::load_from_json(&contents)
            .with_context(|| format!("Failed to build catalog from {}", path.display()))
    }

    /// Build a catalog from catalog-file JSON
    pub fn load_from_json(json: &str) -> Result<Catalog> {
        let file: CatalogFile = serde_json::from_str(json).context("Malformed catalog JSON")?;

        debug!(
            "Parsed {} location rows and {} airport rows",
            file.locations.len(),
            file.airports.len()
        );

        let catalog = Catalog::build(file.locations, file.airports)
            .context("Catalog rows failed validation")?;

        info!(
            "Catalog ready: {} airports across {} locations",
            catalog.airports().len(),
            catalog.locations().len()
        );

        Ok(catalog)
    }
}
