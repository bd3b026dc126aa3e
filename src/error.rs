//! Error taxonomy.
//!
//! The table search is total; the only failures are configuration mistakes
//! and the enumeration oracle refusing inputs beyond its length guard.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A normalized input exceeds the enumeration guard.
    #[error("input too large for enumeration: {len} symbols (limit {limit})")]
    InputTooLarge { len: usize, limit: usize },

    #[error("enumeration limit must be positive")]
    InvalidLimit,
}
