//! Example: longest common subsequence with both strategies.
//!
//! Run with:
//! `cargo run --example lcs -- ABAZDC BACBAD`

use subseq_finder::{normalize::normalize, Matcher, Strategy};

fn main() {
    let mut args = std::env::args().skip(1);
    let s = args.next().unwrap_or_else(|| "ABAZDC".to_string());
    let t = args.next().unwrap_or_else(|| "BACBAD".to_string());

    let (a, b) = normalize(&s, &t);
    println!("Normalized: '{a}' / '{b}'");

    for strategy in [Strategy::Table, Strategy::Enumeration] {
        match Matcher::new(strategy).find(&s, &t) {
            Ok(lcs) => println!("{strategy}: '{lcs}' (length {})", lcs.len()),
            Err(err) => println!("{strategy}: {err}"),
        }
    }
}
