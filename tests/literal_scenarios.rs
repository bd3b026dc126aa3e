use subseq_finder::{
    cases::{default_cases, run_cases},
    longest_common_subsequence, Matcher, Strategy,
};

#[test]
fn literal_scenarios_table() {
    assert_eq!(longest_common_subsequence("ABAZDC", "BACBAD"), "ABAD");
    assert_eq!(longest_common_subsequence("AGGTAB", "GXTXAYB"), "GTAB");
    assert_eq!(longest_common_subsequence("AAAA", "AA"), "AA");
    assert_eq!(longest_common_subsequence("", "..."), "");
    assert_eq!(longest_common_subsequence("ABBA", "ABCABA"), "ABBA");
}

#[test]
fn literal_scenarios_are_case_insensitive() {
    assert_eq!(longest_common_subsequence("abazdc", "bacbad"), "ABAD");
    assert_eq!(longest_common_subsequence("aggtab", "GXTXAYB"), "GTAB");
    assert_eq!(longest_common_subsequence("abba", "AbCaBa"), "ABBA");
}

#[test]
fn case_table_passes_under_every_strategy() {
    for strategy in [Strategy::Table, Strategy::Enumeration] {
        let report = run_cases(&Matcher::new(strategy), &default_cases());
        for outcome in &report.outcomes {
            assert!(
                outcome.passed(),
                "{strategy}: {:?} vs {:?} gave {:?}, expected {:?}",
                outcome.case.left,
                outcome.case.right,
                outcome.actual,
                outcome.case.expected
            );
        }
        assert_eq!(report.passed(), 5);
        assert_eq!(report.failed(), 0);
    }
}

#[test]
fn no_overlap_returns_empty() {
    assert_eq!(longest_common_subsequence("ABC", "XYZ"), "");
    assert_eq!(longest_common_subsequence("", ""), "");
    assert_eq!(longest_common_subsequence("123", "123"), "");
    let oracle = Matcher::new(Strategy::Enumeration);
    assert_eq!(oracle.find("ABC", "XYZ").unwrap(), "");
    assert_eq!(oracle.find("", "").unwrap(), "");
}
