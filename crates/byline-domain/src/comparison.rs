//! Comparator - the exact-match predicate used for scoring
//!
//! Ground truth is the entry's author list joined with [`AUTHOR_SEPARATOR`]
//! in its original order. An extraction is correct only when its author field
//! is byte-for-byte identical: no case folding, no whitespace trimming, no
//! reordering.

/// Separator placed between ground-truth author names
pub const AUTHOR_SEPARATOR: &str = "; ";

/// Build the expected author string from an ordered author list
///
/// # Examples
///
/// ```
/// use byline_domain::expected_author;
///
/// let authors = vec!["Jane Doe".to_string(), "John Smith".to_string()];
/// assert_eq!(expected_author(&authors), "Jane Doe; John Smith");
/// ```
pub fn expected_author(authors: &[String]) -> String {
    authors.join(AUTHOR_SEPARATOR)
}

/// Decide whether an extracted author matches the expected string
///
/// `actual` is `None` when extraction produced no result; that never matches.
pub fn authors_match(expected: &str, actual: Option<&str>) -> bool {
    actual.is_some_and(|actual| actual == expected)
}
