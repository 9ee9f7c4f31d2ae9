// SPDX-License-Identifier: MIT OR Apache-2.0
//! linebench command line
//!
//! Argument parsing, validation into a [`BenchConfig`] and orchestration of
//! benchmark runs and report output. The binary in `main.rs` only installs
//! logging and wires these together.

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, ValueEnum};
use linebench_core::{BenchmarkReport, ProcessMemoryProbe, ProcessingMode};
use linebench_io::{Encoding, UTF_8, charset_for_label, default_strategies};
use linebench_report::{ConsoleReport, HtmlReportWriter, log_errors, to_json};
use linebench_runner::{BenchmarkRunner, DefaultScenarioCatalog};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default location of the HTML report
pub const DEFAULT_REPORT_PATH: &str = "reports/benchmark-report.html";

/// Console output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable text report
    #[default]
    Text,
    /// Pretty JSON of the result model
    Json,
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "linebench")]
#[command(version, about = "Compare file read strategies over CSV aggregation scenarios", long_about = None)]
pub struct Args {
    /// CSV file to benchmark
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Charset label, only honoured directly after FILE
    #[arg(value_name = "CHARSET")]
    pub charset_positional: Option<String>,

    /// Processing mode (single, isolated); both run when omitted
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Charset label, e.g. UTF-8, latin1, UTF-16LE
    #[arg(long, value_name = "NAME")]
    pub charset: Option<String>,

    /// Number of complete runs aggregated in the HTML report
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub runs: u32,

    /// HTML report destination
    #[arg(long, value_name = "PATH", default_value = DEFAULT_REPORT_PATH)]
    pub report: PathBuf,

    /// Console output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Args {
    /// Parse arguments, dropping a positional charset that follows a flag
    ///
    /// # Errors
    ///
    /// Returns the clap error for malformed command lines, including `--help`
    /// and `--version` requests.
    pub fn parse_from_os<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        let mut parsed = Self::from_arg_matches(&matches)?;
        if !positional_charset_first(&matches) {
            parsed.charset_positional = None;
        }
        Ok(parsed)
    }

    /// One-line usage text
    #[must_use]
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }
}

/// Whether the positional charset precedes every `--mode` and `--charset`
fn positional_charset_first(matches: &ArgMatches) -> bool {
    let Some(position) = matches.index_of("charset_positional") else {
        return false;
    };
    ["mode", "charset"]
        .into_iter()
        .filter_map(|id| matches.index_of(id))
        .all(|flag| position < flag)
}

/// Reasons an invocation is refused before any benchmark runs
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Input file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    /// Unrecognised `--mode` label
    #[error("Unknown mode: {0}")]
    UnknownMode(String),
    /// Unrecognised charset label
    #[error("Unknown charset: {0}")]
    UnknownCharset(String),
}

/// Validated benchmark configuration
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Input CSV file
    pub path: PathBuf,
    /// Charset used to decode the file
    pub charset: &'static Encoding,
    /// Modes to run, in order
    pub modes: Vec<ProcessingMode>,
    /// Complete repetitions of all modes
    pub runs: u32,
    /// HTML report destination
    pub report_path: PathBuf,
    /// Console output format
    pub format: OutputFormat,
}

impl BenchConfig {
    /// Validate parsed arguments
    ///
    /// Returns `Ok(None)` when no file was given, in which case only usage
    /// should be shown.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a missing file, an unknown mode or an
    /// unknown charset, checked in that order.
    pub fn from_args(args: &Args) -> Result<Option<Self>, ConfigError> {
        let Some(path) = args.file.clone() else {
            return Ok(None);
        };
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path));
        }

        let modes = match &args.mode {
            Some(label) => {
                let mode = ProcessingMode::from_label(label)
                    .ok_or_else(|| ConfigError::UnknownMode(label.clone()))?;
                vec![mode]
            }
            None => ProcessingMode::ALL.to_vec(),
        };

        let charset = match args.charset.as_ref().or(args.charset_positional.as_ref()) {
            Some(label) => {
                charset_for_label(label).map_err(|_| ConfigError::UnknownCharset(label.clone()))?
            }
            None => UTF_8,
        };

        Ok(Some(Self {
            path,
            charset,
            modes,
            runs: args.runs,
            report_path: args.report.clone(),
            format: args.format,
        }))
    }

    /// One-line description for the start-up log
    #[must_use]
    pub fn summary(&self) -> String {
        let modes: Vec<&str> = self.modes.iter().map(|m| m.display_name()).collect();
        format!(
            "file={} charset={} modes=[{}] runs={} report={}",
            self.path.display(),
            self.charset.name(),
            modes.join(", "),
            self.runs,
            self.report_path.display()
        )
    }
}

/// Run the benchmark and write the reports
///
/// The console or JSON output of the last run goes to `out`. The HTML document
/// aggregates every run; failing to write it is logged and not fatal.
///
/// # Errors
///
/// Returns an error if writing to `out` or JSON serialization fails.
pub fn run(config: &BenchConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    let runner = BenchmarkRunner::new(
        default_strategies(),
        Box::new(DefaultScenarioCatalog),
        Box::new(ProcessMemoryProbe::new()),
    );

    let mut runs: Vec<Vec<BenchmarkReport>> = Vec::new();
    for iteration in 1..=config.runs {
        debug!(run = iteration, of = config.runs, "starting run");
        let reports = config
            .modes
            .iter()
            .map(|&mode| runner.run(&config.path, config.charset, mode))
            .collect();
        runs.push(reports);
    }

    let last = runs.last().map_or(&[][..], Vec::as_slice);
    match config.format {
        OutputFormat::Text => write!(out, "{}", ConsoleReport(last))?,
        OutputFormat::Json => writeln!(out, "{}", to_json(last)?)?,
    }
    out.flush()?;
    log_errors(last);

    match HtmlReportWriter::write_aggregated(&runs, &config.report_path) {
        Ok(()) => info!(path = %config.report_path.display(), "HTML report written"),
        Err(e) => warn!("Failed to write HTML report: {e}"),
    }
    Ok(())
}
