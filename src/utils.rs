//! Assorted utilities and helpers.

/// Default cap on normalized input length for the enumeration strategy.
///
/// Candidate sets grow roughly as 2^n; sixteen symbols keep a single query
/// well under a second.
pub const DEFAULT_ENUMERATION_LIMIT: usize = 16;

/// Whether `needle` can be obtained from `haystack` by deleting elements.
pub fn is_subsequence(needle: &[u8], haystack: &[u8]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|c| rest.any(|h| h == c))
}
