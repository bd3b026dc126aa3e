//! Canonical O(n·m) dynamic program for the longest common subsequence.
//!
//! Two shapes of the same recurrence live here:
//! - a single rolling row ([`lcs_last_row`]) when only the length is needed;
//! - a full suffix table when the subsequence itself must be reconstructed.
//!
//! Reconstruction walks the suffix table front to back and at every step takes
//! the smallest alphabet symbol whose earliest joint occurrence still leaves an
//! optimal remainder. Taking the earliest occurrence never loses length, since
//! suffix LCS values only shrink as the start positions advance. The result is
//! therefore the lexicographically smallest of all maximal-length common
//! subsequences.

use crate::alphabet;
use crate::error::MatchError;
use crate::normalize::NormalizedString;
use crate::traits::SubsequenceSearch;

/// Compute the last DP row of LCS(x, y).
///
/// Returns a vector `row` of length |y|+1, where row[j] = LCS(x, y[0..j]).
pub fn lcs_last_row(x: &[u8], y: &[u8]) -> Vec<u32> {
    let m = y.len();
    let mut prev = vec![0u32; m + 1];
    let mut curr = vec![0u32; m + 1];

    for &cx in x {
        for j in 1..=m {
            let up = prev[j];
            let left = curr[j - 1];
            let diag = prev[j - 1] + u32::from(cx == y[j - 1]);
            curr[j] = up.max(left).max(diag);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev
}

/// Length of the longest common subsequence, in O(|y|) space.
pub fn lcs_length(x: &[u8], y: &[u8]) -> usize {
    // Keep the shorter sequence along the row.
    let (x, y) = if y.len() <= x.len() { (x, y) } else { (y, x) };
    lcs_last_row(x, y).last().copied().unwrap_or(0) as usize
}

/// Suffix table: `table[i][j] = LCS(x[i..], y[j..])`.
fn suffix_table(x: &[u8], y: &[u8]) -> Vec<Vec<u32>> {
    let n = x.len();
    let m = y.len();
    let mut dp = vec![vec![0u32; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            dp[i][j] = if x[i] == y[j] {
                dp[i + 1][j + 1] + 1
            } else {
                dp[i + 1][j].max(dp[i][j + 1])
            };
        }
    }
    dp
}

/// `next[i][k]`: first position `p >= i` with `s[p]` the k-th symbol, or `s.len()`.
fn next_occurrence(s: &[u8]) -> Vec<[usize; alphabet::SIZE]> {
    let n = s.len();
    let mut next = vec![[n; alphabet::SIZE]; n + 1];
    for i in (0..n).rev() {
        next[i] = next[i + 1];
        next[i][alphabet::index(s[i])] = i;
    }
    next
}

/// Lexicographically smallest maximal-length common subsequence of two
/// alphabet strings.
///
/// # Panics
/// Panics if either input holds a byte outside `A`..=`Z`; pass
/// [`NormalizedString`] bytes.
pub fn longest_common_table(x: &[u8], y: &[u8]) -> Vec<u8> {
    let n = x.len();
    let m = y.len();
    if n == 0 || m == 0 {
        return Vec::new();
    }

    let dp = suffix_table(x, y);
    let next_x = next_occurrence(x);
    let next_y = next_occurrence(y);

    #[cfg(feature = "tracing")]
    tracing::trace!(rows = n + 1, cols = m + 1, length = dp[0][0], "suffix table filled");

    let mut out = Vec::with_capacity(dp[0][0] as usize);
    let (mut i, mut j) = (0usize, 0usize);
    let mut remaining = dp[0][0];

    while remaining > 0 {
        let step = alphabet::SYMBOLS.iter().find_map(|&symbol| {
            let k = alphabet::index(symbol);
            let (p, q) = (next_x[i][k], next_y[j][k]);
            (p < n && q < m && dp[p + 1][q + 1] + 1 == remaining).then_some((symbol, p, q))
        });
        match step {
            Some((symbol, p, q)) => {
                out.push(symbol);
                i = p + 1;
                j = q + 1;
                remaining -= 1;
            }
            // Unreachable while the table is consistent.
            None => break,
        }
    }

    out
}

/// Production strategy backed by the DP table. Never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct TableSearch;

impl SubsequenceSearch for TableSearch {
    fn name(&self) -> &'static str {
        "table"
    }

    fn search(&self, a: &NormalizedString, b: &NormalizedString) -> Result<Vec<u8>, MatchError> {
        Ok(longest_common_table(a.as_bytes(), b.as_bytes()))
    }
}
