//! Location model: a city with optional state, country and timezone

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// Composite identity of a location, as the loader's rows key it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationKey {
    pub city: String,
    pub country: String,
}

impl LocationKey {
    #[must_use]
    pub fn new<S: Into<String>>(city: S, country: S) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
        }
    }
}

/// One location row as the external loader supplies it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecord {
    pub city: String,
    /// Absent for locations with no state/province subdivision
    pub state: Option<String>,
    pub country: String,
    /// IANA time-zone identifier, e.g. "America/Chicago"
    pub timezone: String,
}

/// Normalized search keys for a location, precomputed at catalog build time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationKeys {
    pub city: String,
    pub state: Option<String>,
    pub country: String,
    pub full: String,
}

/// A location in the catalog, immutable after construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: Option<String>,
    pub country: String,
    /// IANA time-zone identifier, retained for the presentation layer
    pub timezone: String,
    /// Human-readable display string, e.g. "Chicago, Illinois" or "Toronto, Canada"
    pub full: String,
    /// Normalized search keys derived from the fields above
    pub keys: LocationKeys,
}

impl Location {
    /// Build a location from a loader row, precomputing the display string
    /// and all normalized search keys.
    ///
    /// US locations omit the country from the display string and fall back
    /// to "USA" when no state is present:
    /// "Chicago, Illinois" rather than "Chicago, Illinois, United States".
    #[must_use]
    pub fn from_record(record: LocationRecord) -> Self {
        let LocationRecord {
            city,
            state,
            country,
            timezone,
        } = record;

        let full = if country == "United States" {
            format!("{}, {}", city, state.as_deref().unwrap_or("USA"))
        } else {
            match &state {
                Some(state) => format!("{city}, {state}, {country}"),
                None => format!("{city}, {country}"),
            }
        };

        let keys = LocationKeys {
            city: normalize(&city),
            state: state.as_deref().map(normalize),
            country: normalize(&country),
            full: normalize(&full),
        };

        Self {
            city,
            state,
            country,
            timezone,
            full,
            keys,
        }
    }

    /// The composite identity of this location
    #[must_use]
    pub fn key(&self) -> LocationKey {
        LocationKey::new(self.city.clone(), self.country.clone())
    }
}
