// SPDX-License-Identifier: MIT OR Apache-2.0
//! Line processor fanning parsed records out to scenarios

use crate::parser::CsvLineParser;
use crate::scenario::Scenario;
use linebench_core::{ProcessingSummary, Result, ScenarioResult};
use linebench_io::LineSink;
use std::time::{Duration, Instant};

/// [`LineSink`] for one read pass
///
/// The first delivered line is the header and is skipped. Every later line is
/// parsed; valid records go to each scenario in order while the time spent
/// inside each scenario is accumulated separately.
#[derive(Debug)]
pub struct CsvScenarioProcessor {
    scenarios: Vec<Box<dyn Scenario>>,
    elapsed: Vec<Duration>,
    header_seen: bool,
    records_processed: u64,
    invalid_lines: u64,
}

impl CsvScenarioProcessor {
    /// Processor feeding `scenarios`
    #[must_use]
    pub fn new(scenarios: Vec<Box<dyn Scenario>>) -> Self {
        let elapsed = vec![Duration::ZERO; scenarios.len()];
        Self {
            scenarios,
            elapsed,
            header_seen: false,
            records_processed: 0,
            invalid_lines: 0,
        }
    }

    /// Valid records seen so far
    #[must_use]
    pub const fn records_processed(&self) -> u64 {
        self.records_processed
    }

    /// Rejected lines seen so far
    #[must_use]
    pub const fn invalid_lines(&self) -> u64 {
        self.invalid_lines
    }

    /// Snapshot of counters and scenario results
    #[must_use]
    pub fn summary(&self) -> ProcessingSummary {
        let scenarios = self
            .scenarios
            .iter()
            .zip(&self.elapsed)
            .map(|(scenario, elapsed)| {
                let data = scenario.snapshot();
                ScenarioResult::new(scenario.name(), *elapsed, data.count, data.breakdown)
            })
            .collect();
        ProcessingSummary::new(self.records_processed, self.invalid_lines, scenarios)
    }
}

impl LineSink for CsvScenarioProcessor {
    fn accept(&mut self, line: &str) -> Result<()> {
        if !self.header_seen {
            self.header_seen = true;
            return Ok(());
        }

        let Some(record) = CsvLineParser::parse(line) else {
            self.invalid_lines += 1;
            return Ok(());
        };

        self.records_processed += 1;
        for (scenario, elapsed) in self.scenarios.iter_mut().zip(&mut self.elapsed) {
            let start = Instant::now();
            scenario.accept(&record);
            *elapsed += start.elapsed();
        }
        Ok(())
    }
}
