//! Category labels are persisted as a single delimited string.
//!
//! The delimiter is not escaped: a label containing `", "` will not survive
//! a storage round trip. Known limitation, kept for compatibility with
//! existing rows.

const DELIMITER: &str = ", ";

/// Joins non-empty labels with `", "` in input order.
/// An empty list yields an empty string.
pub fn to_storage(labels: &[String]) -> String {
    labels
        .iter()
        .filter(|label| !label.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(DELIMITER)
}

/// Splits a stored categories string back into labels, discarding empty
/// segments.
pub fn from_storage(text: &str) -> Vec<String> {
    text.split(DELIMITER)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
