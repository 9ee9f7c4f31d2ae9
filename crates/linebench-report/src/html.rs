// SPDX-License-Identifier: MIT OR Apache-2.0
//! Self-contained HTML report
//!
//! One document covers one or more benchmark runs. With several runs, times
//! and memory deltas are shown as mean +/- sample standard deviation, error
//! counts are summed, and counts and breakdowns come from the first run.

use crate::console::scenario_names;
use crate::format::{format_memory_mb, format_nanos};
use crate::stats::Stats;
use linebench_core::{BenchmarkReport, BenchmarkResult, ProcessingMode, Result, ScenarioResult};
use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::Path;
use tracing::debug;

const TITLE: &str = "File Processing Benchmark Report";

/// Writes [`HtmlDocument`]s to disk
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlReportWriter;

impl HtmlReportWriter {
    /// Write a report for a single run
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](linebench_core::Error::Io) if the directory or
    /// file cannot be written.
    pub fn write(reports: &[BenchmarkReport], path: &Path) -> Result<()> {
        Self::write_aggregated(std::slice::from_ref(&reports.to_vec()), path)
    }

    /// Write a report aggregating `runs`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](linebench_core::Error::Io) if the directory or
    /// file cannot be written.
    pub fn write_aggregated(runs: &[Vec<BenchmarkReport>], path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let generated_at = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        fs::write(path, HtmlDocument::new(runs, generated_at).to_string())?;
        debug!(path = %path.display(), runs = runs.len(), "html report written");
        Ok(())
    }
}

/// [`Display`] adapter rendering runs as an HTML document
#[derive(Debug, Clone)]
pub struct HtmlDocument<'a> {
    runs: &'a [Vec<BenchmarkReport>],
    generated_at: String,
}

impl<'a> HtmlDocument<'a> {
    /// Document for `runs`, stamped with `generated_at`
    #[must_use]
    pub fn new(runs: &'a [Vec<BenchmarkReport>], generated_at: impl Into<String>) -> Self {
        Self {
            runs,
            generated_at: generated_at.into(),
        }
    }

    const fn run_count(&self) -> usize {
        if self.runs.len() > 1 { self.runs.len() } else { 1 }
    }
}

struct AggregatedReport<'a> {
    mode: ProcessingMode,
    results: Vec<AggregatedResult<'a>>,
}

struct AggregatedResult<'a> {
    baseline: &'a BenchmarkResult,
    duration: Stats,
    memory: Stats,
    error_count: u64,
    scenarios: Vec<AggregatedScenario<'a>>,
}

struct AggregatedScenario<'a> {
    baseline: &'a ScenarioResult,
    duration: Stats,
}

fn nanos(duration: std::time::Duration) -> f64 {
    duration.as_nanos() as f64
}

/// Line up every run's results with the first run's modes and strategies
fn aggregate(runs: &[Vec<BenchmarkReport>]) -> Vec<AggregatedReport<'_>> {
    let Some(baseline) = runs.first() else {
        return Vec::new();
    };

    baseline
        .iter()
        .map(|report| {
            let results = report
                .results()
                .iter()
                .map(|base| {
                    let matching: Vec<&BenchmarkResult> = runs
                        .iter()
                        .filter_map(|run| run.iter().find(|r| r.mode() == report.mode()))
                        .filter_map(|r| r.result(base.strategy_name()))
                        .collect();

                    let scenarios = base
                        .summary()
                        .scenarios()
                        .iter()
                        .map(|scenario| {
                            let durations: Vec<f64> = matching
                                .iter()
                                .filter_map(|r| r.summary().scenario(scenario.name()))
                                .map(|s| nanos(s.duration()))
                                .collect();
                            AggregatedScenario {
                                baseline: scenario,
                                duration: Stats::from_values(&durations),
                            }
                        })
                        .collect();

                    let durations: Vec<f64> = matching.iter().map(|r| nanos(r.duration())).collect();
                    let memory: Vec<f64> = matching.iter().map(|r| r.memory_bytes() as f64).collect();
                    AggregatedResult {
                        baseline: base,
                        duration: Stats::from_values(&durations),
                        memory: Stats::from_values(&memory),
                        error_count: matching.iter().map(|r| r.error_count()).sum(),
                        scenarios,
                    }
                })
                .collect();
            AggregatedReport {
                mode: report.mode(),
                results,
            }
        })
        .collect()
}

/// Escape text for HTML element and attribute content
#[must_use]
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[allow(clippy::cast_possible_truncation)]
fn format_stat_millis(nanos: f64) -> String {
    format_nanos(nanos.round().max(0.0) as u128)
}

fn format_time(stats: Stats, runs: usize) -> String {
    if runs > 1 {
        format!(
            "{} +/- {}",
            format_stat_millis(stats.mean),
            format_stat_millis(stats.std_dev)
        )
    } else {
        format_stat_millis(stats.mean)
    }
}

fn format_memory(stats: Stats, runs: usize) -> String {
    if runs > 1 {
        format!("{} +/- {}", format_memory_mb(stats.mean), format_memory_mb(stats.std_dev))
    } else {
        format_memory_mb(stats.mean)
    }
}

impl Display for HtmlDocument<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let runs = self.run_count();
        let suffix = if runs > 1 { ", mean +/- std" } else { "" };

        write!(
            f,
            "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{TITLE}</title><style>{CSS}</style></head><body><main>"
        )?;
        write!(
            f,
            "<header><h1>{TITLE}</h1><div class=\"header-meta\">Generated at {}</div>\
             <div class=\"header-meta\">Runs: {runs}{}</div></header>",
            escape(&self.generated_at),
            if runs > 1 { " (mean +/- std dev)" } else { "" }
        )?;

        for report in aggregate(self.runs) {
            write!(
                f,
                "<section><div class=\"mode-title\">Mode: {}</div><div class=\"mode-subtitle\">{}</div>",
                escape(report.mode.display_name()),
                escape(report.mode.timing_basis())
            )?;
            write_summary_table(f, &report, runs, suffix)?;
            write_scenario_details(f, &report, runs, suffix)?;
            write_comparison(f, &report, runs, self.runs)?;
            f.write_str("</section>")?;
        }

        f.write_str("</main></body></html>")
    }
}

fn write_summary_table(f: &mut Formatter<'_>, report: &AggregatedReport<'_>, runs: usize, suffix: &str) -> fmt::Result {
    write!(
        f,
        "<div class=\"card\"><table class=\"table\"><thead><tr><th>Strategy</th>\
         <th>{}</th><th>{}</th><th>Records</th><th>Invalid</th><th>Errors</th></tr></thead><tbody>",
        escape(&format!("Total time (ms{suffix})")),
        escape(&format!("Memory delta (MB{suffix})"))
    )?;
    for result in &report.results {
        let summary = result.baseline.summary();
        write!(
            f,
            "<tr><td><span class=\"badge\">{}</span></td><td>{}</td><td>{}</td>\
             <td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(result.baseline.strategy_name()),
            format_time(result.duration, runs),
            format_memory(result.memory, runs),
            summary.records_processed(),
            summary.invalid_lines(),
            result.error_count
        )?;
    }
    f.write_str("</tbody></table></div>")
}

fn write_scenario_details(
    f: &mut Formatter<'_>,
    report: &AggregatedReport<'_>,
    runs: usize,
    suffix: &str,
) -> fmt::Result {
    f.write_str("<div class=\"grid\" style=\"margin-top: 16px;\">")?;
    for result in &report.results {
        write!(
            f,
            "<details class=\"details\"><summary>{} - Scenario timings</summary>\
             <table class=\"table\" style=\"margin-top: 10px;\">\n<thead><tr><th>Scenario</th>\
             <th>{}</th><th>Total</th><th>Breakdown</th></tr></thead><tbody>",
            escape(result.baseline.strategy_name()),
            escape(&format!("Time (ms{suffix})"))
        )?;
        for scenario in &result.scenarios {
            let breakdown = scenario.baseline.breakdown();
            let breakdown = if breakdown.is_empty() {
                String::new()
            } else {
                breakdown.to_string()
            };
            write!(
                f,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"breakdown\">{}</td></tr>",
                escape(scenario.baseline.name()),
                format_time(scenario.duration, runs),
                scenario.baseline.count(),
                escape(&breakdown)
            )?;
        }
        f.write_str("</tbody></table></details>")?;
    }
    f.write_str("</div>")
}

fn write_comparison(
    f: &mut Formatter<'_>,
    report: &AggregatedReport<'_>,
    runs: usize,
    source: &[Vec<BenchmarkReport>],
) -> fmt::Result {
    f.write_str(
        "<div class=\"card\" style=\"margin-top: 18px;\"><div class=\"mode-subtitle\">Scenario comparison</div>\
         <table class=\"table\"><thead><tr><th>Scenario</th>",
    )?;
    for result in &report.results {
        write!(f, "<th>{}</th>", escape(result.baseline.strategy_name()))?;
    }
    f.write_str("</tr></thead><tbody>")?;

    let names = source
        .first()
        .and_then(|run| run.iter().find(|r| r.mode() == report.mode))
        .map(scenario_names)
        .unwrap_or_default();
    for name in names {
        write!(f, "<tr><td>{}</td>", escape(name))?;
        for result in &report.results {
            let cell = result
                .scenarios
                .iter()
                .find(|s| s.baseline.name() == name)
                .map_or_else(
                    || format!("{} ms / total 0", format_time(Stats::default(), runs)),
                    |s| format!("{} ms / total {}", format_time(s.duration, runs), s.baseline.count()),
                );
            write!(f, "<td>{}</td>", escape(&cell))?;
        }
        f.write_str("</tr>")?;
    }
    f.write_str("</tbody></table></div>")
}

const CSS: &str = ":root{--bg:#f4f1ec;--ink:#1b1b1b;--muted:#5f5a53;--card:#ffffff;--accent:#1f5f5b;--border:#d8d2c8;}\
*{box-sizing:border-box;}\
body{margin:0;font-family:\"Space Grotesk\",\"Noto Sans\",sans-serif;color:var(--ink);\
background:linear-gradient(180deg,#f4f1ec 0%,#f9f7f3 100%);}\
main{max-width:1200px;margin:0 auto;padding:40px 24px 80px;}\
header{margin-bottom:32px;}\
h1{margin:0 0 8px;font-size:32px;letter-spacing:-0.5px;}\
.header-meta{color:var(--muted);}\
section{margin-bottom:48px;}\
.mode-title{font-size:24px;margin-bottom:8px;}\
.mode-subtitle{color:var(--muted);margin-bottom:16px;}\
.card{background:var(--card);border:1px solid var(--border);border-radius:12px;padding:16px;\
box-shadow:0 8px 20px rgba(0,0,0,0.05);}\
.grid{display:grid;gap:16px;}\
.table{width:100%;border-collapse:collapse;font-size:14px;}\
.table th,.table td{border-bottom:1px solid var(--border);padding:10px 8px;text-align:left;}\
.table th{color:var(--muted);font-weight:600;}\
.badge{display:inline-flex;padding:2px 8px;border-radius:999px;background:rgba(31,95,91,0.12);\
color:var(--accent);font-size:12px;font-weight:600;}\
.details{border:1px solid var(--border);border-radius:10px;padding:12px 16px;background:#fffdf9;}\
.details summary{cursor:pointer;font-weight:600;display:block;width:100%;padding:4px 0;}\
.breakdown{color:var(--muted);font-size:13px;margin-top:8px;}\
@media (max-width:900px){main{padding:24px 16px 48px;}h1{font-size:26px;}}";
