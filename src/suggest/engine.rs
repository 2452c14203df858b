//! Ranking engine
//!
//! Orchestrates the field passes: selects the priority tier from the
//! query length, runs each field against the shrinking airport pool under
//! one shared result budget, then groups and orders the matches before
//! handing them to the assembler.

use tracing::debug;

use crate::catalog::Catalog;
use crate::normalize::normalize;
use crate::suggest::assemble::{self, Section};
use crate::suggest::field::{self, FieldMatch, SearchField, Tier};

/// Maximum number of suggestions across all sections of one response
pub const RESULT_LIMIT: usize = 10;

/// Produce ranked, grouped suggestions for a free-text query.
///
/// An empty query, or one that matches nothing, yields an empty list;
/// the call never fails.
#[must_use]
pub fn suggest(catalog: &Catalog, query: &str) -> Vec<Section> {
    let query = normalize(query);
    if query.is_empty() {
        return Vec::new();
    }

    let tier = Tier::for_len(query.chars().count());
    debug!("Suggesting for query {:?} at tier {:?}", query, tier);

    // order the fields by their priority at this tier; the sort is stable,
    // so fields sharing a priority keep declaration order, which decides
    // which field claims an airport matched through the full-string fallback
    let mut fields = SearchField::ALL;
    fields.sort_by_key(|f| f.priority(tier));

    // the pool of not-yet-claimed airports is private to this call
    let mut pool: Vec<usize> = (0..catalog.airports().len()).collect();
    let mut matches: Vec<FieldMatch> = Vec::new();
    let mut budget = RESULT_LIMIT;

    for field in fields {
        budget = field::run_pass(catalog, field, &query, &mut pool, budget, &mut matches);
        if budget == 0 {
            break;
        }
    }

    let groups = group_by_location(catalog, matches, tier);
    assemble::assemble(catalog, groups)
}

/// Matches for one location, in final member order
pub(crate) struct MatchGroup {
    pub location: usize,
    pub members: Vec<FieldMatch>,
}

/// Group matches by their airport's location and apply both orderings:
/// members by (field priority, normalized airport name), groups by the
/// minimum member priority. Both sorts are stable, so ties preserve the
/// order in which matches were claimed.
fn group_by_location(catalog: &Catalog, matches: Vec<FieldMatch>, tier: Tier) -> Vec<MatchGroup> {
    let mut groups: Vec<MatchGroup> = Vec::new();

    for m in matches {
        let location = catalog.airport(m.airport).location;
        match groups.iter_mut().find(|g| g.location == location) {
            Some(group) => group.members.push(m),
            None => groups.push(MatchGroup {
                location,
                members: vec![m],
            }),
        }
    }

    for group in &mut groups {
        group.members.sort_by(|a, b| {
            a.field
                .priority(tier)
                .cmp(&b.field.priority(tier))
                .then_with(|| {
                    catalog
                        .airport(a.airport)
                        .name_key
                        .cmp(&catalog.airport(b.airport).name_key)
                })
        });
    }

    groups.sort_by_key(|group| {
        group
            .members
            .iter()
            .map(|m| m.field.priority(tier))
            .min()
            .unwrap_or(u8::MAX)
    });

    groups
}
