//! The in-memory airport catalog
//!
//! A [`Catalog`] is built once from the loader's location and airport rows,
//! validated in the process, and never mutated afterwards. Every suggestion
//! request reads it through a shared reference; all cross-references between
//! airports and locations are resolved to indices at build time so the
//! request path never re-validates anything.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::debug;

use crate::error::CatalogError;
use crate::models::airport::IATA_CODE_LEN;
use crate::models::{Airport, AirportRecord, Location, LocationKey, LocationRecord};

/// Immutable snapshot of locations and airports with precomputed search keys
#[derive(Debug)]
pub struct Catalog {
    locations: Vec<Location>,
    location_index: HashMap<LocationKey, usize>,
    airports: Vec<Airport>,
    /// Both the raw and the normalized form of each IATA code map to the
    /// same airport, so lookups work for either spelling.
    iata_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from loader rows, validating every cross-reference.
    ///
    /// Fails on an airport whose (city, country) pair matches no location
    /// row, on an IATA code that is not exactly 3 characters, and on two
    /// location rows sharing the same (city, country) identity.
    pub fn build(
        location_records: Vec<LocationRecord>,
        airport_records: Vec<AirportRecord>,
    ) -> Result<Self, CatalogError> {
        let mut locations = Vec::with_capacity(location_records.len());
        let mut location_index = HashMap::with_capacity(location_records.len());

        for record in location_records {
            let location = Location::from_record(record);
            match location_index.entry(location.key()) {
                Entry::Occupied(_) => {
                    return Err(CatalogError::duplicate_location(
                        location.city,
                        location.country,
                    ));
                }
                Entry::Vacant(entry) => {
                    entry.insert(locations.len());
                    locations.push(location);
                }
            }
        }

        let mut airports = Vec::with_capacity(airport_records.len());
        let mut iata_index = HashMap::with_capacity(airport_records.len() * 2);

        for record in airport_records {
            if record.iata.chars().count() != IATA_CODE_LEN {
                return Err(CatalogError::invalid_code(record.iata, record.name));
            }

            let key = LocationKey::new(record.city.clone(), record.country.clone());
            let Some(&location) = location_index.get(&key) else {
                return Err(CatalogError::unknown_location(
                    record.iata,
                    record.city,
                    record.country,
                ));
            };

            let airport = Airport::from_record(record, location);
            iata_index.insert(airport.code.clone(), airports.len());
            iata_index.insert(airport.code_key.clone(), airports.len());
            airports.push(airport);
        }

        debug!(
            locations = locations.len(),
            airports = airports.len(),
            "catalog built"
        );

        Ok(Self {
            locations,
            location_index,
            airports,
            iata_index,
        })
    }

    /// All airports, in load order
    #[must_use]
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    /// All locations, in load order
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// The airport at a given index in the airport table
    #[must_use]
    pub fn airport(&self, index: usize) -> &Airport {
        &self.airports[index]
    }

    /// The location at a given index in the location table
    #[must_use]
    pub fn location(&self, index: usize) -> &Location {
        &self.locations[index]
    }

    /// The location owning a given airport
    #[must_use]
    pub fn location_of(&self, airport: &Airport) -> &Location {
        &self.locations[airport.location]
    }

    /// Look up an airport by IATA code, raw or normalized form
    #[must_use]
    pub fn airport_by_code(&self, code: &str) -> Option<&Airport> {
        self.iata_index.get(code).map(|&i| &self.airports[i])
    }

    /// Look up a location by its composite identity
    #[must_use]
    pub fn location_by_key(&self, key: &LocationKey) -> Option<&Location> {
        self.location_index.get(key).map(|&i| &self.locations[i])
    }
}
