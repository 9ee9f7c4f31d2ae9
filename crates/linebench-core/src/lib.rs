// SPDX-License-Identifier: MIT OR Apache-2.0
//! Core types, error handling, and measurement helpers for linebench
//!
//! This crate provides the foundational types shared by the linebench crates:
//!
//! - [`error`] - Error taxonomy and Result alias
//! - [`record`] - The structured CSV record handed to scenarios
//! - [`model`] - The immutable benchmark result tree
//! - [`metrics`] - Elapsed time, memory delta and the process memory probe

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]

/// Error types for linebench operations
pub mod error;
/// Timing and memory measurement helpers
pub mod metrics;
/// Benchmark result model
pub mod model;
/// Structured CSV record
pub mod record;

// Re-exports for convenience
pub use error::{DecodeError, Error, Result};
pub use metrics::{MemoryProbe, ProcessMemoryProbe, elapsed_between, memory_delta};
pub use model::{
    BenchmarkReport, BenchmarkResult, Breakdown, ProcessingMode, ProcessingSummary,
    ScenarioResult,
};
pub use record::CsvRecord;
