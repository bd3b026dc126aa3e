use proptest::prelude::*;
use subseq_finder::{
    candidates::all_subsequences, normalize::normalize, table::lcs_length, utils::is_subsequence,
    Matcher, MatchError, Strategy,
};

proptest! {
    #[test]
    fn candidates_are_true_subsequences(s in "[ABC]{0,10}") {
        let set = all_subsequences(s.as_bytes());
        for m in set.iter() {
            prop_assert!(m.len() >= 2);
            prop_assert!(is_subsequence(m, s.as_bytes()));
        }
    }

    #[test]
    fn enumeration_agrees_with_table(a in "[ABCD]{0,9}", b in "[ABCD]{0,9}") {
        let table = Matcher::new(Strategy::Table).find(&a, &b).unwrap();
        let oracle = Matcher::new(Strategy::Enumeration).find(&a, &b).unwrap();
        if table.len() >= 2 {
            prop_assert_eq!(oracle, table);
        } else {
            // One-symbol matches never appear as candidates.
            prop_assert_eq!(oracle, "");
        }
    }

    #[test]
    fn enumeration_finds_every_long_subsequence(s in "[ABC]{2,8}", picks in proptest::collection::vec(any::<bool>(), 8)) {
        let chosen: Vec<u8> = s
            .bytes()
            .zip(picks.iter().copied())
            .filter_map(|(c, keep)| keep.then_some(c))
            .collect();
        prop_assume!(chosen.len() >= 2);
        prop_assert!(all_subsequences(s.as_bytes()).contains(&chosen));
    }
}

#[test]
fn guard_applies_after_normalization() {
    let matcher = Matcher::with_limit(Strategy::Enumeration, 6);
    let padded = "A.B.C-D E F";
    assert_eq!(matcher.find(padded, "abcdef").unwrap(), "ABCDEF");

    let long = "ABCDEFG";
    assert_eq!(
        matcher.find(long, long),
        Err(MatchError::InputTooLarge { len: 7, limit: 6 })
    );
}

#[test]
fn oracle_matches_length_on_fixed_pairs() {
    let pairs = [
        ("ACCGGTCGAG", "GTCGTTCGGA"),
        ("ABCBDAB", "BDCABA"),
        ("XMJYAUZ", "MZJAWXU"),
    ];
    let oracle = Matcher::new(Strategy::Enumeration);
    for (a, b) in pairs {
        let (na, nb) = normalize(a, b);
        let found = oracle.find(a, b).unwrap();
        assert_eq!(found.len(), lcs_length(na.as_bytes(), nb.as_bytes()), "{a} / {b}");
    }
}
