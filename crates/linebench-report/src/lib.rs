// SPDX-License-Identifier: MIT OR Apache-2.0
//! Renderers for linebench results
//!
//! - [`console`] - Plain text report with a scenario comparison table
//! - [`json`] - Pretty JSON of the result model
//! - [`html`] - Self-contained HTML document, optionally aggregating several runs
//!
//! Renderers only read the result model; nothing here mutates a report.

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

/// Console text renderer
pub mod console;
/// Number formatting shared by the renderers
pub mod format;
/// HTML document writer
pub mod html;
/// JSON renderer
pub mod json;
/// Run statistics
pub mod stats;

pub use console::{ConsoleReport, log_errors};
pub use format::{format_duration, format_memory_mb, format_nanos};
pub use html::{HtmlDocument, HtmlReportWriter};
pub use json::to_json;
pub use stats::Stats;
