//! Literal verification cases and a runner for them.
//!
//! The case table is plain data handed to [`run_cases`]; nothing here is
//! global. With the `parallel` feature the cases are evaluated on the rayon
//! pool. Outcomes always come back in input order.

use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::error::MatchError;
use crate::matcher::Matcher;

/// One `(left, right, expected)` triple. `expected` is uppercase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestCase {
    pub left: String,
    pub right: String,
    pub expected: String,
}

impl TestCase {
    pub fn new(left: impl Into<String>, right: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            expected: expected.into(),
        }
    }
}

/// The five reference scenarios.
pub fn default_cases() -> Vec<TestCase> {
    vec![
        TestCase::new("ABAZDC", "BACBAD", "ABAD"),
        TestCase::new("AGGTAB", "GXTXAYB", "GTAB"),
        TestCase::new("AAAA", "AA", "AA"),
        TestCase::new("", "...", ""),
        TestCase::new("ABBA", "ABCABA", "ABBA"),
    ]
}

/// Result of running one case.
#[derive(Clone, Debug)]
pub struct CaseOutcome {
    pub case: TestCase,
    pub actual: Result<String, MatchError>,
    pub elapsed: Duration,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        matches!(&self.actual, Ok(actual) if *actual == self.case.expected)
    }
}

/// Outcomes of a full run, in case order.
#[derive(Clone, Debug, Default)]
pub struct Report {
    pub outcomes: Vec<CaseOutcome>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    pub fn total_elapsed(&self) -> Duration {
        self.outcomes.iter().map(|o| o.elapsed).sum()
    }
}

pub fn run_case(matcher: &Matcher, case: &TestCase) -> CaseOutcome {
    let start = Instant::now();
    let actual = matcher.find(&case.left, &case.right);
    let elapsed = start.elapsed();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        left = %case.left,
        right = %case.right,
        expected = %case.expected,
        ?actual,
        elapsed_us = elapsed.as_micros() as u64,
        "case evaluated"
    );

    CaseOutcome {
        case: case.clone(),
        actual,
        elapsed,
    }
}

#[cfg(feature = "parallel")]
pub fn run_cases(matcher: &Matcher, cases: &[TestCase]) -> Report {
    let outcomes = cases.par_iter().map(|c| run_case(matcher, c)).collect();
    Report { outcomes }
}

#[cfg(not(feature = "parallel"))]
pub fn run_cases(matcher: &Matcher, cases: &[TestCase]) -> Report {
    let outcomes = cases.iter().map(|c| run_case(matcher, c)).collect();
    Report { outcomes }
}
