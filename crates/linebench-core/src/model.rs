// SPDX-License-Identifier: MIT OR Apache-2.0
//! Benchmark result model
//!
//! The result tree is built bottom-up by the runner and is read-only once
//! returned:
//!
//! ```text
//! BenchmarkReport (one per mode)
//! └── BenchmarkResult (one per read strategy)
//!     └── ProcessingSummary
//!         └── ScenarioResult (one per active scenario)
//!             └── Breakdown
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// Timing discipline used for a benchmark run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProcessingMode {
    /// All scenarios share one read pass per strategy
    SinglePass,
    /// Every scenario gets its own read pass per strategy
    Isolated,
}

impl ProcessingMode {
    /// Both modes in the order they run by default
    pub const ALL: [Self; 2] = [Self::SinglePass, Self::Isolated];

    /// Human readable name used by the renderers
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SinglePass => "Single-Pass (Realistic)",
            Self::Isolated => "Isolated (Analytical)",
        }
    }

    /// Sentence explaining what a scenario timing means in this mode
    #[must_use]
    pub const fn timing_basis(self) -> &'static str {
        match self {
            Self::SinglePass => "Scenario time reflects processing inside one pass.",
            Self::Isolated => "Scenario time includes the full pass for each scenario.",
        }
    }

    /// Parse a command-line mode label
    ///
    /// Labels are trimmed and matched case-insensitively. Returns `None` for
    /// anything unrecognised.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "single" | "single-pass" | "single_pass" | "realistic" => Some(Self::SinglePass),
            "isolated" | "analytical" | "analytic" => Some(Self::Isolated),
            _ => None,
        }
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Category to count distribution produced by a scenario
///
/// Entry order is decided by the producing scenario (insertion order or
/// sorted). The breakdown is an owned snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakdown {
    entries: Vec<(String, u64)>,
}

impl Breakdown {
    /// An empty breakdown
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Count recorded for `category`, if present
    #[must_use]
    pub fn get(&self, category: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, count)| *count)
    }

    /// Entries in scenario order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Number of categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no category was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for Breakdown {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, count)| (name.into(), count))
                .collect(),
        }
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, count)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={count}")?;
        }
        f.write_str("}")
    }
}

impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, count) in &self.entries {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn serialize_nanos<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_nanos().min(u128::from(u64::MAX)) as u64)
}

/// Outcome of one scenario within one read pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioResult {
    name: String,
    #[serde(rename = "duration_nanos", serialize_with = "serialize_nanos")]
    duration: Duration,
    count: u64,
    breakdown: Breakdown,
}

impl ScenarioResult {
    /// Create a scenario result
    #[must_use]
    pub fn new(name: impl Into<String>, duration: Duration, count: u64, breakdown: Breakdown) -> Self {
        Self {
            name: name.into(),
            duration,
            count,
            breakdown,
        }
    }

    /// Scenario name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Time attributed to the scenario
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Observed count
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Category distribution, empty for plain counters
    #[must_use]
    pub const fn breakdown(&self) -> &Breakdown {
        &self.breakdown
    }

    /// Same result with a different duration
    #[must_use]
    pub fn with_duration(self, duration: Duration) -> Self {
        Self { duration, ..self }
    }
}

/// Counters and scenario results of one read pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingSummary {
    records_processed: u64,
    invalid_lines: u64,
    scenarios: Vec<ScenarioResult>,
}

impl ProcessingSummary {
    /// Create a summary
    #[must_use]
    pub const fn new(records_processed: u64, invalid_lines: u64, scenarios: Vec<ScenarioResult>) -> Self {
        Self {
            records_processed,
            invalid_lines,
            scenarios,
        }
    }

    /// Lines parsed into a record and forwarded to the scenarios
    #[must_use]
    pub const fn records_processed(&self) -> u64 {
        self.records_processed
    }

    /// Non-header lines rejected by the parser
    #[must_use]
    pub const fn invalid_lines(&self) -> u64 {
        self.invalid_lines
    }

    /// Scenario results in catalog order
    #[must_use]
    pub fn scenarios(&self) -> &[ScenarioResult] {
        &self.scenarios
    }

    /// Look up a scenario result by name
    #[must_use]
    pub fn scenario(&self, name: &str) -> Option<&ScenarioResult> {
        self.scenarios.iter().find(|s| s.name == name)
    }
}

/// Measurements of one read strategy under one mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkResult {
    strategy_name: String,
    #[serde(rename = "duration_nanos", serialize_with = "serialize_nanos")]
    duration: Duration,
    memory_bytes: u64,
    summary: ProcessingSummary,
    error_count: u64,
    error_message: Option<String>,
}

impl BenchmarkResult {
    /// Create a benchmark result
    #[must_use]
    pub fn new(
        strategy_name: impl Into<String>,
        duration: Duration,
        memory_bytes: u64,
        summary: ProcessingSummary,
        error_count: u64,
        error_message: Option<String>,
    ) -> Self {
        Self {
            strategy_name: strategy_name.into(),
            duration,
            memory_bytes,
            summary,
            error_count,
            error_message,
        }
    }

    /// Name of the read strategy
    #[must_use]
    pub fn strategy_name(&self) -> &str {
        &self.strategy_name
    }

    /// Total wall time attributed to the strategy
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Memory delta over the strategy's work, clamped at zero
    #[must_use]
    pub const fn memory_bytes(&self) -> u64 {
        self.memory_bytes
    }

    /// Counters and scenario results
    #[must_use]
    pub const fn summary(&self) -> &ProcessingSummary {
        &self.summary
    }

    /// Invalid lines plus failed read passes
    #[must_use]
    pub const fn error_count(&self) -> u64 {
        self.error_count
    }

    /// Message of the last read failure, if any
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

/// All strategy results for one mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkReport {
    mode: ProcessingMode,
    results: Vec<BenchmarkResult>,
}

impl BenchmarkReport {
    /// Create a report
    #[must_use]
    pub const fn new(mode: ProcessingMode, results: Vec<BenchmarkResult>) -> Self {
        Self { mode, results }
    }

    /// Mode the report was produced under
    #[must_use]
    pub const fn mode(&self) -> ProcessingMode {
        self.mode
    }

    /// Strategy results in strategy order
    #[must_use]
    pub fn results(&self) -> &[BenchmarkResult] {
        &self.results
    }

    /// Look up a strategy result by name
    #[must_use]
    pub fn result(&self, strategy_name: &str) -> Option<&BenchmarkResult> {
        self.results
            .iter()
            .find(|r| r.strategy_name == strategy_name)
    }
}
