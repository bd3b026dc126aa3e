//! Longest common subsequence over a fixed 26-letter alphabet.
//!
//! A query runs in two stages:
//! 1. [`normalize`](normalize::normalize) case-folds both inputs onto `A`..`Z`
//!    and keeps, in each, only the symbols that also occur in the other.
//! 2. A [`SubsequenceSearch`] strategy finds the longest common subsequence of
//!    the normalized pair.
//!
//! Two strategies ship with the crate:
//! - [`TableSearch`](table::TableSearch), the canonical O(n·m) dynamic
//!   program and the production path;
//! - [`EnumerationSearch`](candidates::EnumerationSearch), which builds a
//!   candidate set of chained subsequences for each input and intersects
//!   them. It is exponential, length-guarded, and kept as a reference oracle.
//!
//! Whenever several common subsequences share the maximal length, the
//! lexicographically smallest one is returned. Both strategies apply the
//! same rule.
//!
//! ## Quick start
//! ```
//! use subseq_finder::{longest_common_subsequence, Matcher, Strategy};
//!
//! assert_eq!(longest_common_subsequence("AGGTAB", "GXTXAYB"), "GTAB");
//!
//! let oracle = Matcher::new(Strategy::Enumeration);
//! assert_eq!(oracle.find("ABBA", "abcaba").unwrap(), "ABBA");
//! ```

pub mod alphabet;
pub mod builder;
pub mod candidates;
pub mod cases;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::MatcherBuilder;
pub use crate::error::MatchError;
pub use crate::matcher::{longest_common_subsequence, Matcher, Strategy};
pub use crate::traits::SubsequenceSearch;
