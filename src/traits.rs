//! The search seam between [`Matcher`](crate::matcher::Matcher) and a strategy.
//!
//! A strategy receives an already normalized pair and returns the longest
//! common subsequence it can find, as uppercase ASCII bytes. Implementations
//! must honour the crate-wide tie-break: among maximal-length results, the
//! lexicographically smallest wins.

use crate::error::MatchError;
use crate::normalize::NormalizedString;

pub trait SubsequenceSearch {
    /// Short identifier used in reports and tracing output.
    fn name(&self) -> &'static str;

    /// Find the longest common subsequence of `a` and `b`.
    ///
    /// Returns an empty vector when the inputs share no subsequence the
    /// strategy can see. Errors only signal inputs the strategy refuses to
    /// process, never an absent match.
    fn search(&self, a: &NormalizedString, b: &NormalizedString) -> Result<Vec<u8>, MatchError>;
}
