//! Error types for catalog construction
//!
//! The suggest path itself is infallible: any query text produces a
//! (possibly empty) suggestion list. The only fault class is malformed
//! input from the catalog loader, which surfaces here at build time.

use thiserror::Error;

/// Faults raised while building a [`crate::Catalog`] from loader records
#[derive(Error, Debug)]
pub enum CatalogError {
    /// An airport row references a (city, country) pair with no location row
    #[error("airport {code} references unknown location \"{city}, {country}\"")]
    UnknownLocation {
        code: String,
        city: String,
        country: String,
    },

    /// An airport row carries an IATA code that is not exactly 3 characters
    #[error("airport \"{name}\" has invalid IATA code {code:?}")]
    InvalidCode { code: String, name: String },

    /// Two distinct location rows share the same (city, country) identity
    #[error("duplicate location rows for \"{city}, {country}\"")]
    DuplicateLocation { city: String, country: String },

    /// I/O failure while reading a catalog file
    #[error("catalog I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Malformed JSON in a catalog file
    #[error("catalog parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Create an unknown-location error for an airport row
    pub fn unknown_location<S: Into<String>>(code: S, city: S, country: S) -> Self {
        Self::UnknownLocation {
            code: code.into(),
            city: city.into(),
            country: country.into(),
        }
    }

    /// Create an invalid-code error for an airport row
    pub fn invalid_code<S: Into<String>>(code: S, name: S) -> Self {
        Self::InvalidCode {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Create a duplicate-location error
    pub fn duplicate_location<S: Into<String>>(city: S, country: S) -> Self {
        Self::DuplicateLocation {
            city: city.into(),
            country: country.into(),
        }
    }
}
