// SPDX-License-Identifier: MIT OR Apache-2.0
//! Benchmark orchestration
//!
//! For every read strategy the runner measures wall time and memory growth of
//! its work under the requested [`ProcessingMode`]:
//!
//! - **Single-Pass**: one read with every scenario attached. Scenario timings
//!   are the time spent inside each scenario.
//! - **Isolated**: one read per scenario. Each scenario is timed with its whole
//!   pass and the strategy total is the sum of the passes. A failing pass ends
//!   the strategy's run after recording its partial result.
//!
//! Read failures never abort the benchmark. They are logged, counted and kept
//! as the result's error message.

use crate::processor::CsvScenarioProcessor;
use crate::scenario::ScenarioCatalog;
use linebench_core::{
    BenchmarkReport, BenchmarkResult, Error, MemoryProbe, ProcessingMode, ProcessingSummary, elapsed_between,
    memory_delta,
};
use linebench_io::{Encoding, ReadStrategy};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Runs every strategy against one file
pub struct BenchmarkRunner {
    strategies: Vec<Box<dyn ReadStrategy>>,
    catalog: Box<dyn ScenarioCatalog>,
    probe: Box<dyn MemoryProbe>,
}

impl std::fmt::Debug for BenchmarkRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenchmarkRunner")
            .field("strategies", &self.strategies)
            .finish_non_exhaustive()
    }
}

/// Outcome of driving one strategy, before memory is attached
struct Measured {
    duration: Duration,
    summary: ProcessingSummary,
    error_count: u64,
    error_message: Option<String>,
}

impl BenchmarkRunner {
    /// Runner over `strategies`, building scenarios from `catalog`
    #[must_use]
    pub fn new(
        strategies: Vec<Box<dyn ReadStrategy>>,
        catalog: Box<dyn ScenarioCatalog>,
        probe: Box<dyn MemoryProbe>,
    ) -> Self {
        Self {
            strategies,
            catalog,
            probe,
        }
    }

    /// Strategies in run order
    #[must_use]
    pub fn strategies(&self) -> &[Box<dyn ReadStrategy>] {
        &self.strategies
    }

    /// Measure every strategy on `path` under `mode`
    #[must_use]
    pub fn run(&self, path: &Path, charset: &'static Encoding, mode: ProcessingMode) -> BenchmarkReport {
        debug!(path = %path.display(), charset = charset.name(), %mode, "benchmark run");
        let results = self
            .strategies
            .iter()
            .map(|strategy| self.run_strategy(strategy.as_ref(), path, charset, mode))
            .collect();
        BenchmarkReport::new(mode, results)
    }

    fn run_strategy(
        &self,
        strategy: &dyn ReadStrategy,
        path: &Path,
        charset: &'static Encoding,
        mode: ProcessingMode,
    ) -> BenchmarkResult {
        let before = self.probe.used_bytes();
        let measured = match mode {
            ProcessingMode::SinglePass => self.single_pass(strategy, path, charset),
            ProcessingMode::Isolated => self.isolated(strategy, path, charset),
        };
        let after = self.probe.used_bytes();

        BenchmarkResult::new(
            strategy.name(),
            measured.duration,
            memory_delta(before, after),
            measured.summary,
            measured.error_count,
            measured.error_message,
        )
    }

    fn single_pass(&self, strategy: &dyn ReadStrategy, path: &Path, charset: &'static Encoding) -> Measured {
        let mut processor = CsvScenarioProcessor::new(self.catalog.create_scenarios());
        let start = Instant::now();
        let outcome = strategy.read(path, charset, &mut processor);
        let duration = elapsed_between(start, Instant::now());
        debug!(strategy = strategy.name(), ?duration, "single pass finished");

        let summary = processor.summary();
        let mut error_count = summary.invalid_lines();
        let error_message = outcome.err().map(|e| {
            error_count += 1;
            report_failure(strategy, &e)
        });

        Measured {
            duration,
            summary,
            error_count,
            error_message,
        }
    }

    fn isolated(&self, strategy: &dyn ReadStrategy, path: &Path, charset: &'static Encoding) -> Measured {
        let mut duration = Duration::ZERO;
        let mut counters: Option<(u64, u64)> = None;
        let mut scenarios = Vec::new();
        let mut failures = 0;
        let mut error_message = None;

        for scenario in self.catalog.create_scenarios() {
            let name = scenario.name().to_string();
            let mut processor = CsvScenarioProcessor::new(vec![scenario]);
            let start = Instant::now();
            let outcome = strategy.read(path, charset, &mut processor);
            let pass = elapsed_between(start, Instant::now());
            duration += pass;
            debug!(strategy = strategy.name(), scenario = %name, ?pass, "isolated pass finished");

            let summary = processor.summary();
            if counters.is_none() {
                counters = Some((summary.records_processed(), summary.invalid_lines()));
            }
            scenarios.extend(summary.scenarios().iter().cloned().map(|s| s.with_duration(pass)));

            if let Err(e) = outcome {
                failures += 1;
                error_message = Some(report_failure(strategy, &e));
                break;
            }
        }

        let (records_processed, invalid_lines) = counters.unwrap_or_default();
        Measured {
            duration,
            summary: ProcessingSummary::new(records_processed, invalid_lines, scenarios),
            error_count: invalid_lines + failures,
            error_message,
        }
    }
}

fn report_failure(strategy: &dyn ReadStrategy, error: &Error) -> String {
    warn!(strategy = strategy.name(), %error, "read failed");
    error.to_string()
}
