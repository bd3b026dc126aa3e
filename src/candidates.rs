//! Chain enumeration of subsequence candidates.
//!
//! Candidates are built back to front. For every position `i` the first
//! symbol `s[i]` is
//! - paired with each later symbol `c`, giving the two-symbol chains `s[i] c`;
//! - joined onto every candidate of the suffix `s[i+1..]` that starts with
//!   such a `c`, where the shared `c` is written once.
//!
//! Every candidate is a true subsequence of its source. Single symbols are
//! never produced, so a one-symbol common subsequence is invisible to this
//! enumeration. Candidate counts grow exponentially with input length; the
//! [`EnumerationSearch`] strategy refuses inputs above a configurable limit.

use std::collections::BTreeSet;
use std::ops::Bound;

use crate::error::MatchError;
use crate::normalize::NormalizedString;
use crate::traits::SubsequenceSearch;
use crate::utils::DEFAULT_ENUMERATION_LIMIT;

/// Deduplicated, ordered set of candidate subsequences of one string.
///
/// Iteration is ascending in byte order, which fixes the tie-break used by
/// [`CandidateSet::longest_shared`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateSet {
    members: BTreeSet<Vec<u8>>,
}

impl CandidateSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, candidate: &[u8]) -> bool {
        self.members.contains(candidate)
    }

    /// Members in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.members.iter().map(Vec::as_slice)
    }

    /// Longest member also present in `other`.
    ///
    /// Ties on length go to the lexicographically smallest member. Returns
    /// `None` when the sets are disjoint.
    pub fn longest_shared<'a>(&'a self, other: &'a CandidateSet) -> Option<&'a [u8]> {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut best: Option<&[u8]> = None;
        for member in small.iter().filter(|m| large.contains(m)) {
            if best.map_or(true, |b| member.len() > b.len()) {
                best = Some(member);
            }
        }
        best
    }
}

/// Enumerate the candidate set of `s`. The empty string yields an empty set.
pub fn all_subsequences(s: &[u8]) -> CandidateSet {
    let mut members: BTreeSet<Vec<u8>> = BTreeSet::new();

    for i in (0..s.len()).rev() {
        let first = s[i];
        let rest = &s[i + 1..];
        let mut level: Vec<Vec<u8>> = Vec::new();

        let mut followers: Vec<u8> = rest.to_vec();
        followers.sort_unstable();
        followers.dedup();

        for &c in &followers {
            level.push(vec![first, c]);
            // Suffix candidates starting with `c`, by prefix range.
            let hi = match c.checked_add(1) {
                Some(next) => Bound::Excluded(vec![next]),
                None => Bound::Unbounded,
            };
            for tail in members.range((Bound::Included(vec![c]), hi)) {
                let mut joined = Vec::with_capacity(tail.len() + 1);
                joined.push(first);
                joined.extend_from_slice(tail);
                level.push(joined);
            }
        }

        members.extend(level);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(source_len = s.len(), candidates = members.len(), "enumerated");

    CandidateSet { members }
}

/// Reference strategy: intersect the two candidate sets.
#[derive(Clone, Copy, Debug)]
pub struct EnumerationSearch {
    limit: usize,
}

impl EnumerationSearch {
    /// # Panics
    /// Panics if `limit == 0`.
    pub fn new(limit: usize) -> Self {
        assert!(limit > 0, "enumeration limit must be positive");
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    fn guard(&self, s: &NormalizedString) -> Result<(), MatchError> {
        if s.len() > self.limit {
            return Err(MatchError::InputTooLarge {
                len: s.len(),
                limit: self.limit,
            });
        }
        Ok(())
    }
}

impl Default for EnumerationSearch {
    fn default() -> Self {
        Self::new(DEFAULT_ENUMERATION_LIMIT)
    }
}

impl SubsequenceSearch for EnumerationSearch {
    fn name(&self) -> &'static str {
        "enumeration"
    }

    fn search(&self, a: &NormalizedString, b: &NormalizedString) -> Result<Vec<u8>, MatchError> {
        self.guard(a)?;
        self.guard(b)?;
        let left = all_subsequences(a.as_bytes());
        let right = all_subsequences(b.as_bytes());

        #[cfg(feature = "tracing")]
        tracing::debug!(left = left.len(), right = right.len(), "candidate sets built");

        Ok(left
            .longest_shared(&right)
            .map(<[u8]>::to_vec)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::utils::is_subsequence;

    fn members(s: &str) -> Vec<String> {
        all_subsequences(s.as_bytes())
            .iter()
            .map(|m| String::from_utf8_lossy(m).into_owned())
            .collect()
    }

    #[test]
    fn empty_and_single_symbol_have_no_candidates() {
        assert!(all_subsequences(b"").is_empty());
        assert!(all_subsequences(b"A").is_empty());
    }

    #[test]
    fn three_distinct_symbols() {
        assert_eq!(members("ABC"), vec!["AB", "ABC", "AC", "BC"]);
    }

    #[test]
    fn duplicates_are_collapsed() {
        assert_eq!(members("ABA"), vec!["AA", "AB", "ABA", "BA"]);
        assert_eq!(members("AAA"), vec!["AA", "AAA"]);
    }

    #[test]
    fn every_member_is_a_subsequence() {
        let source = b"ABBACDAB";
        let set = all_subsequences(source);
        assert!(!set.is_empty());
        for m in set.iter() {
            assert!(m.len() >= 2);
            assert!(is_subsequence(m, source), "{:?}", m);
        }
    }

    #[test]
    fn longest_shared_prefers_smallest_on_ties() {
        let a = all_subsequences(b"AB");
        let b = all_subsequences(b"BA");
        assert_eq!(a.longest_shared(&b), None);

        let a = all_subsequences(b"ABBA");
        let b = all_subsequences(b"BAAB");
        // AA, AB, BA, BB are all shared length-2 candidates.
        assert_eq!(a.longest_shared(&b), Some(&b"AA"[..]));
    }

    #[test]
    fn guard_reports_length_and_limit() {
        let search = EnumerationSearch::new(3);
        let (a, b) = normalize("ABCD", "ABCD");
        assert_eq!(
            search.search(&a, &b),
            Err(MatchError::InputTooLarge { len: 4, limit: 3 })
        );
        let (a, b) = normalize("ABC", "CBA");
        assert_eq!(search.search(&a, &b), Ok(Vec::new()));
    }
}
