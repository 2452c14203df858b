//! Per-field matching rules
//!
//! Each searchable field carries a fixed priority vector (indexed by query
//! tier) and a display category, and knows how to claim matching airports
//! out of the shared pool. A claimed airport is spliced out of the pool the
//! moment it is recorded, so later field passes can never see it again.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::airport::IATA_CODE_LEN;

/// Priority tier, selected by how the normalized query length compares to
/// the fixed IATA code length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Query shorter than a code: partial city / code typing
    Short,
    /// Query exactly code-length: most likely an IATA code
    Exact,
    /// Query longer than a code: names and places
    Long,
}

impl Tier {
    /// Select the tier for a normalized query length
    #[must_use]
    pub fn for_len(len: usize) -> Self {
        if len < IATA_CODE_LEN {
            Self::Short
        } else if len == IATA_CODE_LEN {
            Self::Exact
        } else {
            Self::Long
        }
    }
}

/// How the presentation layer should render a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DisplayCategory {
    /// Matched via a location field (city/state/country)
    A,
    /// Part of a multi-result location group
    B,
    /// Matched via an airport field (code/name)
    C,
}

/// A searchable field of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    City,
    Iata,
    Name,
    State,
    Country,
}

impl SearchField {
    /// All fields; declaration order is the tie order when two fields share
    /// a priority value at some tier
    pub const ALL: [Self; 5] = [
        Self::City,
        Self::Iata,
        Self::Name,
        Self::State,
        Self::Country,
    ];

    /// Priority vector indexed by tier; lower is evaluated first and wins
    /// later sorts
    #[must_use]
    pub const fn priorities(self) -> [u8; 3] {
        match self {
            Self::City => [1, 2, 1],
            Self::Iata => [5, 1, 5],
            Self::Name => [2, 3, 2],
            Self::State => [3, 4, 3],
            Self::Country => [4, 5, 4],
        }
    }

    /// Priority of this field at the given tier
    #[must_use]
    pub const fn priority(self, tier: Tier) -> u8 {
        self.priorities()[tier as usize]
    }

    /// Display category for a single-result match on this field
    #[must_use]
    pub const fn display(self) -> DisplayCategory {
        match self {
            Self::City | Self::State | Self::Country => DisplayCategory::A,
            Self::Iata | Self::Name => DisplayCategory::C,
        }
    }
}

/// One claimed airport: its index in the catalog plus the field that
/// claimed it
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldMatch {
    pub airport: usize,
    pub field: SearchField,
}

/// Run one field pass over the pool of unmatched airport indices.
///
/// Scans the pool from its last element toward its first and splices every
/// match out as it is recorded. Stops as soon as `budget` reaches zero and
/// returns the remaining budget (never negative).
pub(crate) fn run_pass(
    catalog: &Catalog,
    field: SearchField,
    query: &str,
    pool: &mut Vec<usize>,
    mut budget: usize,
    matches: &mut Vec<FieldMatch>,
) -> usize {
    if budget == 0 {
        return 0;
    }

    match field {
        SearchField::City | SearchField::State | SearchField::Country => {
            for i in (0..pool.len()).rev() {
                let location = catalog.location_of(catalog.airport(pool[i]));
                let value = match field {
                    SearchField::City => Some(location.keys.city.as_str()),
                    SearchField::State => location.keys.state.as_deref(),
                    SearchField::Country => Some(location.keys.country.as_str()),
                    _ => unreachable!(),
                };

                // a location with no state can still match via its full string
                if value.is_some_and(|v| v.starts_with(query))
                    || location.keys.full.starts_with(query)
                {
                    claim(pool, i, field, matches);
                    budget -= 1;
                    if budget == 0 {
                        return 0;
                    }
                }
            }
        }

        SearchField::Name => {
            for i in (0..pool.len()).rev() {
                if catalog.airport(pool[i]).name_key.starts_with(query) {
                    claim(pool, i, field, matches);
                    budget -= 1;
                    if budget == 0 {
                        return 0;
                    }
                }
            }
        }

        SearchField::Iata => {
            let query_len = query.chars().count();

            // codes are fixed-length, longer queries cannot match
            if query_len > IATA_CODE_LEN {
                return budget;
            }

            if query_len == IATA_CODE_LEN {
                // exact lookup only; a 3-character query that is merely a
                // prefix of some code is not an IATA match
                if catalog.airport_by_code(query).is_none() {
                    return budget;
                }
                if let Some(i) = pool
                    .iter()
                    .rposition(|&a| catalog.airport(a).code_key == query)
                {
                    claim(pool, i, SearchField::Iata, matches);
                    budget -= 1;
                }
            } else {
                for i in (0..pool.len()).rev() {
                    if catalog.airport(pool[i]).code_key.starts_with(query) {
                        claim(pool, i, SearchField::Iata, matches);
                        budget -= 1;
                        if budget == 0 {
                            return 0;
                        }
                    }
                }
            }
        }
    }

    budget
}

fn claim(pool: &mut Vec<usize>, index: usize, field: SearchField, matches: &mut Vec<FieldMatch>) {
    let airport = pool.remove(index);
    matches.push(FieldMatch { airport, field });
}
