//! Suggestion assembly
//!
//! Takes the engine's ordered match groups and emits the final section
//! list, relabeling every member of a multi-result group with the shared
//! "B" display category.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::suggest::engine::MatchGroup;
use crate::suggest::field::{DisplayCategory, SearchField};

/// One suggested airport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// IATA code as loaded, e.g. "ORD"
    pub code: String,
    /// Airport display name
    pub name: String,
    /// Full display string of the airport's location
    pub location: String,
    /// Render hint for the presentation layer
    pub display: DisplayCategory,
    /// The field that claimed this airport
    #[serde(rename = "matchedField")]
    pub matched_field: SearchField,
}

/// One location's worth of suggestions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Full display string of the location
    pub location: String,
    /// Ordered suggestions for this location
    pub suggestions: Vec<Suggestion>,
}

/// Emit sections in the group order received; groups with more than one
/// member lose their field-specific display categories to "B".
pub(crate) fn assemble(catalog: &Catalog, groups: Vec<MatchGroup>) -> Vec<Section> {
    groups
        .into_iter()
        .map(|group| {
            let location = catalog.location(group.location);
            let multi = group.members.len() > 1;

            let suggestions = group
                .members
                .into_iter()
                .map(|m| {
                    let airport = catalog.airport(m.airport);
                    Suggestion {
                        code: airport.code.clone(),
                        name: airport.name.clone(),
                        location: location.full.clone(),
                        display: if multi {
                            DisplayCategory::B
                        } else {
                            m.field.display()
                        },
                        matched_field: m.field,
                    }
                })
                .collect();

            Section {
                location: location.full.clone(),
                suggestions,
            }
        })
        .collect()
}
