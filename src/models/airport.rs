//! Airport model: an IATA-coded airport tied to one catalog location

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// IATA codes are fixed-length
pub const IATA_CODE_LEN: usize = 3;

/// One airport row as the external loader supplies it. The (city, country)
/// pair must reference a location row in the same load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportRecord {
    pub iata: String,
    pub name: String,
    pub city: String,
    pub country: String,
}

/// An airport in the catalog, immutable after construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airport {
    /// IATA code as supplied, e.g. "ORD"
    pub code: String,
    /// Human-readable airport name
    pub name: String,
    /// Index of the owning location in the catalog's location table
    pub location: usize,
    /// Normalized IATA code
    pub code_key: String,
    /// Normalized airport name
    pub name_key: String,
}

impl Airport {
    /// Build an airport from a loader row and the resolved index of its
    /// location. Code-length and location-reference validation happen in
    /// the catalog builder, which owns the location table.
    #[must_use]
    pub fn from_record(record: AirportRecord, location: usize) -> Self {
        let code_key = normalize(&record.iata);
        let name_key = normalize(&record.name);

        Self {
            code: record.iata,
            name: record.name,
            location,
            code_key,
            name_key,
        }
    }
}
