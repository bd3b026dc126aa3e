use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use subseq_finder::cases::{default_cases, run_case, CaseOutcome, TestCase};
use subseq_finder::{MatcherBuilder, Strategy};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

/// Run the literal LCS verification cases, or a single ad-hoc query.
#[derive(Parser, Debug)]
#[command(name = "lcs_probe", version)]
struct Options {
    /// Search strategy (table or enumeration).
    #[arg(long, default_value_t = Strategy::Table)]
    strategy: Strategy,

    /// Output format for the per-case measurements.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Maximum normalized input length accepted by the enumeration strategy.
    #[arg(long)]
    enumeration_limit: Option<usize>,

    /// Left input of an ad-hoc query; requires RIGHT.
    #[arg(requires = "right")]
    left: Option<String>,

    /// Right input of an ad-hoc query.
    right: Option<String>,

    /// Expected result of the ad-hoc query; without it the query always passes.
    #[arg(long, requires = "left")]
    expect: Option<String>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

#[derive(Serialize)]
struct Measurement {
    left: String,
    right: String,
    expected: String,
    actual: Option<String>,
    error: Option<String>,
    passed: bool,
    wall_ms: f64,
    rss_delta_kib: u64,
}

fn main() -> ExitCode {
    let options = Options::parse();

    let mut builder = MatcherBuilder::new().strategy(options.strategy);
    if let Some(limit) = options.enumeration_limit {
        builder = builder.enumeration_limit(limit);
    }
    let matcher = match builder.build() {
        Ok(m) => m,
        Err(err) => {
            eprintln!("lcs_probe: {err}");
            return ExitCode::from(2);
        }
    };

    let cases = match (&options.left, &options.right) {
        (Some(left), Some(right)) => {
            let expected = match &options.expect {
                Some(e) => e.to_ascii_uppercase(),
                None => String::new(),
            };
            vec![TestCase::new(left.as_str(), right.as_str(), expected)]
        }
        _ => default_cases(),
    };
    let adhoc_without_expectation = options.left.is_some() && options.expect.is_none();

    eprintln!(
        "lcs_probe: {} case(s), strategy={}, enumeration_limit={}",
        cases.len(),
        matcher.strategy(),
        matcher.enumeration_limit()
    );

    let mut sys = System::new();
    let total = cases.len();
    let measurements: Vec<Measurement> = cases
        .iter()
        .enumerate()
        .map(|(idx, case)| {
            let before = rss_kib(&mut sys);
            let outcome = run_case(&matcher, case);
            let after = rss_kib(&mut sys);
            let m = measurement(&outcome, after.saturating_sub(before), adhoc_without_expectation);
            let icon = if m.passed { "✓" } else { "✗" };
            eprintln!(
                "  [{}/{}] {} Expected: '{}' | Actual: '{}' ({:.3}ms)",
                idx + 1,
                total,
                icon,
                m.expected,
                m.actual.as_deref().or(m.error.as_deref()).unwrap_or(""),
                m.wall_ms
            );
            m
        })
        .collect();

    let passed = measurements.iter().filter(|m| m.passed).count();
    let failed = measurements.len() - passed;
    eprintln!();
    eprintln!("Success: {passed}");
    eprintln!("Failure: {failed}");

    if let Err(err) = write(options.format, &measurements) {
        eprintln!("lcs_probe output error: {err}");
        return ExitCode::FAILURE;
    }

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn measurement(outcome: &CaseOutcome, rss_delta_kib: u64, always_pass: bool) -> Measurement {
    let (actual, error) = match &outcome.actual {
        Ok(a) => (Some(a.clone()), None),
        Err(e) => (None, Some(e.to_string())),
    };
    let passed = if always_pass {
        outcome.actual.is_ok()
    } else {
        outcome.passed()
    };
    Measurement {
        left: outcome.case.left.clone(),
        right: outcome.case.right.clone(),
        expected: outcome.case.expected.clone(),
        actual,
        error,
        passed,
        wall_ms: outcome.elapsed.as_secs_f64() * 1_000.0,
        rss_delta_kib,
    }
}

fn write(format: OutputFormat, measurements: &[Measurement]) -> Result<(), String> {
    match format {
        OutputFormat::Csv => write_csv(measurements),
        OutputFormat::Table => write_table(measurements),
        OutputFormat::Json => write_json(measurements),
    }
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("left,right,expected,actual,status,wall_ms,rss_delta_kib");
    for m in measurements {
        println!(
            "{},{},{},{},{},{:.3},{}",
            csv_field(&m.left),
            csv_field(&m.right),
            csv_field(&m.expected),
            csv_field(m.actual.as_deref().or(m.error.as_deref()).unwrap_or("")),
            status(m),
            m.wall_ms,
            m.rss_delta_kib
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "left".len();
    let mut col2 = "right".len();
    let mut col3 = "expected".len();
    for m in measurements {
        col1 = col1.max(m.left.len());
        col2 = col2.max(m.right.len());
        col3 = col3.max(m.expected.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:<col3$}  {:>8}  {:>10}  {:>13}  actual",
        "left", "right", "expected", "status", "wall_ms", "rss_delta_kib",
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<col3$}  {:-<8}  {:-<10}  {:-<13}  {:-<6}",
        "", "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:<col3$}  {:>8}  {:>10.3}  {:>13}  {}",
            m.left,
            m.right,
            m.expected,
            status(m),
            m.wall_ms,
            m.rss_delta_kib,
            m.actual.as_deref().or(m.error.as_deref()).unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    let text = serde_json::to_string_pretty(measurements).map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}

fn status(m: &Measurement) -> &'static str {
    if m.passed {
        "passed"
    } else {
        "failed"
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}
