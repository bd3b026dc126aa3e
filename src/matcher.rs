//! Subsequence matcher: normalization followed by a configured search.
//!
//! ```
//! use subseq_finder::longest_common_subsequence;
//!
//! assert_eq!(longest_common_subsequence("abazdc", "BACBAD"), "ABAD");
//! assert_eq!(longest_common_subsequence("", "..."), "");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::candidates::EnumerationSearch;
use crate::error::MatchError;
use crate::normalize::normalize;
use crate::table::TableSearch;
use crate::traits::SubsequenceSearch;
use crate::utils::DEFAULT_ENUMERATION_LIMIT;

/// Which search backs a [`Matcher`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// O(n·m) dynamic program; total over all inputs.
    #[default]
    Table,
    /// Candidate-set intersection; exponential, length-guarded.
    Enumeration,
}

impl Strategy {
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Table => "table",
            Strategy::Enumeration => "enumeration",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "table" => Ok(Self::Table),
            "enumeration" => Ok(Self::Enumeration),
            other => Err(format!("unknown strategy '{other}'")),
        }
    }
}

/// A configured longest-common-subsequence finder.
///
/// Stateless between calls; a single matcher may serve any number of
/// queries, concurrently if shared by reference.
#[derive(Clone, Copy, Debug)]
pub struct Matcher {
    strategy: Strategy,
    table: TableSearch,
    enumeration: EnumerationSearch,
}

impl Matcher {
    /// Matcher with the given strategy and the default enumeration limit.
    pub fn new(strategy: Strategy) -> Self {
        Self::with_limit(strategy, DEFAULT_ENUMERATION_LIMIT)
    }

    /// # Panics
    /// Panics if `enumeration_limit == 0`; use
    /// [`MatcherBuilder`](crate::builder::MatcherBuilder) for a checked
    /// construction.
    pub fn with_limit(strategy: Strategy, enumeration_limit: usize) -> Self {
        Self {
            strategy,
            table: TableSearch,
            enumeration: EnumerationSearch::new(enumeration_limit),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn enumeration_limit(&self) -> usize {
        self.enumeration.limit()
    }

    fn search(&self) -> &dyn SubsequenceSearch {
        match self.strategy {
            Strategy::Table => &self.table,
            Strategy::Enumeration => &self.enumeration,
        }
    }

    /// Longest common subsequence of two raw strings, uppercase.
    ///
    /// The inputs are normalized first, so case and non-alphabet characters
    /// do not matter. An empty string means no common subsequence was found.
    pub fn find(&self, s1: &str, s2: &str) -> Result<String, MatchError> {
        let search = self.search();

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("lcs_find", strategy = search.name());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (a, b) = normalize(s1, s2);

        #[cfg(feature = "tracing")]
        tracing::debug!(left = %a, right = %b, "normalized");

        let found = search.search(&a, &b)?;
        // Searches only emit alphabet bytes.
        Ok(found.into_iter().map(char::from).collect())
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

/// Longest common subsequence of `s1` and `s2` via the table strategy.
///
/// Total: never fails and never panics. Among several maximal-length
/// results the lexicographically smallest is returned.
pub fn longest_common_subsequence(s1: &str, s2: &str) -> String {
    let (a, b) = normalize(s1, s2);
    crate::table::longest_common_table(a.as_bytes(), b.as_bytes())
        .into_iter()
        .map(char::from)
        .collect()
}
