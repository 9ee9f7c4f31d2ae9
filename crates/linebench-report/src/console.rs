// SPDX-License-Identifier: MIT OR Apache-2.0
//! Plain text benchmark report
//!
//! ```text
//! === File Processing Benchmark ===
//!
//! Mode: Single-Pass (Realistic)
//! Timing basis: Scenario time reflects processing inside one pass.
//! Strategy: BufReader
//! Total time (ms): 12.000345
//! ...
//! Scenario comparison (Single-Pass (Realistic))
//! Scenario      | BufReader                | Lines
//! Total Records | 0.120000 ms / total 2    | ...
//! ```

use crate::format::{format_duration, format_memory_mb};
use linebench_core::{BenchmarkReport, ScenarioResult};
use std::fmt::{self, Display, Formatter};
use tracing::warn;

/// [`Display`] adapter rendering reports as console text
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReport<'a>(pub &'a [BenchmarkReport]);

impl Display for ConsoleReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== File Processing Benchmark ===")?;
        for report in self.0 {
            writeln!(f)?;
            writeln!(f, "Mode: {}", report.mode().display_name())?;
            writeln!(f, "Timing basis: {}", report.mode().timing_basis())?;

            for result in report.results() {
                let summary = result.summary();
                writeln!(f, "Strategy: {}", result.strategy_name())?;
                writeln!(f, "Total time (ms): {}", format_duration(result.duration()))?;
                writeln!(f, "Memory delta (MB): {}", format_memory_mb(result.memory_bytes() as f64))?;
                writeln!(f, "Records processed: {}", summary.records_processed())?;
                writeln!(f, "Invalid lines: {}", summary.invalid_lines())?;
                writeln!(f, "Errors: {}", result.error_count())?;
                writeln!(f, "Scenario timings:")?;
                for scenario in summary.scenarios() {
                    write_scenario(f, scenario)?;
                }
                writeln!(f)?;
            }

            write_comparison(f, report)?;
        }
        Ok(())
    }
}

fn write_scenario(f: &mut Formatter<'_>, scenario: &ScenarioResult) -> fmt::Result {
    write!(
        f,
        "  - {}: time={} ms, count={}",
        scenario.name(),
        format_duration(scenario.duration()),
        scenario.count()
    )?;
    if !scenario.breakdown().is_empty() {
        write!(f, ", breakdown={}", scenario.breakdown())?;
    }
    writeln!(f)
}

/// Scenario names of the first strategy, in its order
pub(crate) fn scenario_names(report: &BenchmarkReport) -> Vec<&str> {
    report
        .results()
        .first()
        .map(|r| r.summary().scenarios().iter().map(ScenarioResult::name).collect())
        .unwrap_or_default()
}

fn comparison_cell(report: &BenchmarkReport, strategy: &str, scenario: &str) -> String {
    let found = report
        .result(strategy)
        .and_then(|r| r.summary().scenario(scenario));
    match found {
        Some(s) => format!("{} ms / total {}", format_duration(s.duration()), s.count()),
        None => "0.000000 ms / total 0".to_string(),
    }
}

fn write_comparison(f: &mut Formatter<'_>, report: &BenchmarkReport) -> fmt::Result {
    writeln!(f, "Scenario comparison ({})", report.mode().display_name())?;

    let scenarios = scenario_names(report);
    let scenario_width = scenarios
        .iter()
        .map(|s| s.chars().count())
        .chain(std::iter::once("Scenario".len()))
        .max()
        .unwrap_or_default();

    let columns: Vec<(&str, Vec<String>, usize)> = report
        .results()
        .iter()
        .map(|result| {
            let name = result.strategy_name();
            let cells: Vec<String> = scenarios
                .iter()
                .map(|scenario| comparison_cell(report, name, scenario))
                .collect();
            let width = cells
                .iter()
                .map(|c| c.chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or_default();
            (name, cells, width)
        })
        .collect();

    write!(f, "{:<scenario_width$}", "Scenario")?;
    for &(name, _, width) in &columns {
        write!(f, " | {name:<width$}")?;
    }
    writeln!(f)?;

    for (row, scenario) in scenarios.iter().enumerate() {
        write!(f, "{scenario:<scenario_width$}")?;
        for (_, cells, width) in &columns {
            write!(f, " | {:>width$}", cells[row], width = *width)?;
        }
        writeln!(f)?;
    }
    writeln!(f)
}

/// Log the error message of every failed strategy as a warning
pub fn log_errors(reports: &[BenchmarkReport]) {
    for result in reports.iter().flat_map(BenchmarkReport::results) {
        if let Some(message) = result.error_message() {
            warn!(strategy = result.strategy_name(), "Error: {message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linebench_core::{BenchmarkResult, Breakdown, ProcessingMode, ProcessingSummary};
    use std::time::Duration;

    fn scenario(name: &str, micros: u64, count: u64) -> ScenarioResult {
        ScenarioResult::new(name, Duration::from_micros(micros), count, Breakdown::new())
    }

    fn result(strategy: &str, scenarios: Vec<ScenarioResult>) -> BenchmarkResult {
        BenchmarkResult::new(
            strategy,
            Duration::from_nanos(12_000_345),
            1_572_864,
            ProcessingSummary::new(2, 1, scenarios),
            1,
            None,
        )
    }

    #[test]
    fn test_strategy_block() {
        let by_sex = ScenarioResult::new(
            "By Sex",
            Duration::from_micros(2),
            2,
            [("Male", 0), ("Female", 1), ("Other", 1)].into_iter().collect(),
        );
        let report = BenchmarkReport::new(
            ProcessingMode::SinglePass,
            vec![result("BufReader", vec![scenario("Total Records", 1, 2), by_sex])],
        );
        let text = ConsoleReport(&[report]).to_string();

        assert!(text.starts_with("=== File Processing Benchmark ===\n\nMode: Single-Pass (Realistic)\n"));
        assert!(text.contains("Timing basis: Scenario time reflects processing inside one pass.\n"));
        assert!(text.contains("Strategy: BufReader\nTotal time (ms): 12.000345\nMemory delta (MB): 1.50\n"));
        assert!(text.contains("Records processed: 2\nInvalid lines: 1\nErrors: 1\nScenario timings:\n"));
        assert!(text.contains("  - Total Records: time=0.001000 ms, count=2\n"));
        assert!(text.contains("  - By Sex: time=0.002000 ms, count=2, breakdown={Male=0, Female=1, Other=1}\n"));
    }

    #[test]
    fn test_comparison_table_alignment() {
        let report = BenchmarkReport::new(
            ProcessingMode::Isolated,
            vec![
                result("BufReader", vec![scenario("Total Records", 1, 2), scenario("By UF", 10_000, 2)]),
                result("Lines", vec![scenario("Total Records", 3, 2)]),
            ],
        );
        let text = ConsoleReport(&[report]).to_string();
        let table: Vec<&str> = text
            .lines()
            .skip_while(|l| !l.starts_with("Scenario comparison"))
            .collect();

        assert_eq!(table[0], "Scenario comparison (Isolated (Analytical))");
        assert_eq!(table[1], "Scenario      | BufReader              | Lines                ");
        assert_eq!(table[2], "Total Records |  0.001000 ms / total 2 | 0.003000 ms / total 2");
        assert_eq!(table[3], "By UF         | 10.000000 ms / total 2 | 0.000000 ms / total 0");
    }

    #[test]
    fn test_empty_reports() {
        assert_eq!(ConsoleReport(&[]).to_string(), "=== File Processing Benchmark ===\n");
    }
}
