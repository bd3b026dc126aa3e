//! The fixed 26-symbol alphabet every query is restricted to.
//!
//! Symbols are the uppercase ASCII letters `A`..=`Z`, ordered by byte value.
//! Lowercase ASCII letters fold onto their uppercase symbol; every other
//! character (digits, punctuation, whitespace, non-ASCII) lies outside the
//! alphabet and is discarded by the normalizer.

/// Number of symbols in the alphabet.
pub const SIZE: usize = 26;

/// The alphabet in its canonical order.
pub const SYMBOLS: &[u8; SIZE] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Fold a character onto its alphabet symbol, if it has one.
#[inline]
pub fn fold(ch: char) -> Option<u8> {
    if ch.is_ascii_alphabetic() {
        Some(ch.to_ascii_uppercase() as u8)
    } else {
        None
    }
}

/// Dense index `0..SIZE` of an (already folded) symbol.
///
/// # Panics
/// Panics in debug builds if `symbol` is not an uppercase letter.
#[inline]
pub fn index(symbol: u8) -> usize {
    debug_assert!(symbol.is_ascii_uppercase(), "not an alphabet symbol");
    (symbol - b'A') as usize
}

/// Presence mask of the alphabet symbols occurring in `raw` (case-folded).
pub fn presence(raw: &str) -> [bool; SIZE] {
    let mut seen = [false; SIZE];
    for symbol in raw.chars().filter_map(fold) {
        seen[index(symbol)] = true;
    }
    seen
}
