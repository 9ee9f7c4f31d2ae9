// SPDX-License-Identifier: MIT OR Apache-2.0
//! CSV scenario processing and benchmark orchestration
//!
//! - [`parser`] - Quote-aware split of one CSV line into a [`CsvRecord`](linebench_core::CsvRecord)
//! - [`scenario`] - Pluggable per-record accumulators and the default catalog
//! - [`processor`] - The [`LineSink`](linebench_io::LineSink) fanning records out to scenarios
//! - [`runner`] - Single-Pass and Isolated measurement of every read strategy

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

/// CSV line parser
pub mod parser;
/// Line processor
pub mod processor;
/// Benchmark runner
pub mod runner;
/// Scenarios and catalogs
pub mod scenario;

pub use parser::CsvLineParser;
pub use processor::CsvScenarioProcessor;
pub use runner::BenchmarkRunner;
pub use scenario::{DefaultScenarioCatalog, Scenario, ScenarioCatalog, ScenarioData};
