//! Airport suggestion engine
//!
//! Turns a free-text query into ranked, grouped suggestion sections over
//! an immutable [`crate::Catalog`]. Matching runs field by field in
//! priority order over a shrinking pool of unmatched airports, so every
//! airport appears at most once in a response.

pub mod assemble;
pub mod engine;
pub mod field;

pub use assemble::{Section, Suggestion};
pub use engine::{RESULT_LIMIT, suggest};
pub use field::{DisplayCategory, SearchField, Tier};
