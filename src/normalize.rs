//! Query and catalog text normalization
//!
//! Every prefix or equality comparison in the engine runs over normalized
//! search keys, never raw display text.

/// Make a string search friendly by
///     removing surrounding whitespace
///     making all characters lower case
///     collapsing every run of whitespace to a single space
///     removing every character that is not alphanumeric, underscore, or whitespace
///
/// Normalizing is idempotent: a normalized string passes through unchanged.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.trim().to_lowercase().chars() {
        if c.is_whitespace() {
            pending_space = true;
        } else if c.is_alphanumeric() || c == '_' {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        }
        // anything else (punctuation, symbols) is dropped
    }

    out
}
