//! Comma-separated reference strings.

use crate::common::{PageId, Reference};

/// Parse text such as `"1, 2, 3, 2"` into references.
///
/// Tokens are trimmed and parsed as integers. Anything else, including
/// empty tokens and fractional numbers, becomes [`Reference::Malformed`]
/// and is later skipped by the engine. Never fails.
///
/// # Example
/// ```
/// use pagesim::input::parse_references;
///
/// let refs = parse_references("1, 2, x, 3");
/// assert_eq!(refs.len(), 4);
/// assert!(refs[2].is_malformed());
/// ```
pub fn parse_references(text: &str) -> Vec<Reference> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    text.split(',')
        .map(|token| {
            token
                .trim()
                .parse::<i64>()
                .map_or(Reference::Malformed, |id| Reference::Page(PageId(id)))
        })
        .collect()
}
