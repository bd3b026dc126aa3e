//! Input normalization.
//!
//! Both raw inputs are case-folded onto the [`alphabet`](crate::alphabet) and
//! each is then filtered down to the symbols that also occur somewhere in its
//! partner. The filter is a membership test, not a positional match: order and
//! duplicates of the surviving symbols are preserved.

use std::fmt;

use crate::alphabet;

/// A sequence of alphabet symbols that all occur in both raw inputs.
///
/// Produced only by [`normalize`]; immutable afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NormalizedString {
    symbols: Vec<u8>,
}

impl NormalizedString {
    /// Symbols as ASCII bytes (`A`..=`Z`).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase bytes are ever stored.
        std::str::from_utf8(&self.symbols).unwrap_or_default()
    }
}

impl fmt::Display for NormalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a raw input pair.
///
/// Never fails: empty inputs or inputs without alphabet symbols produce empty
/// normalized strings.
pub fn normalize(s1: &str, s2: &str) -> (NormalizedString, NormalizedString) {
    let in_s1 = alphabet::presence(s1);
    let in_s2 = alphabet::presence(s2);
    (restrict(s1, &in_s2), restrict(s2, &in_s1))
}

fn restrict(raw: &str, partner: &[bool; alphabet::SIZE]) -> NormalizedString {
    let symbols = raw
        .chars()
        .filter_map(alphabet::fold)
        .filter(|&s| partner[alphabet::index(s)])
        .collect();
    NormalizedString { symbols }
}

#[cfg(test)]
mod tests {
    use super::normalize;

    fn pair(s1: &str, s2: &str) -> (String, String) {
        let (a, b) = normalize(s1, s2);
        (a.to_string(), b.to_string())
    }

    #[test]
    fn keeps_only_shared_symbols_in_order() {
        assert_eq!(
            pair("ABAZDC", "BACBAD"),
            ("ABADC".to_string(), "BACBAD".to_string())
        );
        assert_eq!(
            pair("AGGTAB", "GXTXAYB"),
            ("AGGTAB".to_string(), "GTAB".to_string())
        );
    }

    #[test]
    fn folds_case_before_membership() {
        assert_eq!(pair("abc", "CBA"), ("ABC".to_string(), "CBA".to_string()));
        assert_eq!(pair("a-b c", "B"), ("B".to_string(), "B".to_string()));
    }

    #[test]
    fn duplicates_survive() {
        assert_eq!(pair("AAAA", "AA"), ("AAAA".to_string(), "AA".to_string()));
    }

    #[test]
    fn degenerate_inputs_normalize_to_empty() {
        assert_eq!(pair("", "..."), (String::new(), String::new()));
        assert_eq!(pair("123", "abc"), (String::new(), String::new()));
        assert_eq!(pair("XYZ", "ABC"), (String::new(), String::new()));
        let (a, b) = normalize("", "");
        assert!(a.is_empty() && b.is_empty());
    }
}
