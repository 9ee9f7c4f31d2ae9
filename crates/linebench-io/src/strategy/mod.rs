// SPDX-License-Identifier: MIT OR Apache-2.0
//! File read strategies
//!
//! A [`ReadStrategy`] decides how bytes leave storage. Every variant opens the
//! file inside [`ReadStrategy::read`] and releases it on return, including when
//! the sink fails part way through.

use crate::sink::LineSink;
use encoding_rs::Encoding;
use linebench_core::Result;
use std::path::Path;

mod buffered;
mod lines;
mod manual;
mod mmap;

pub use buffered::BufReaderStrategy;
pub use lines::LinesStrategy;
pub use manual::ManualBufferStrategy;
pub use mmap::MemoryMappedStrategy;

/// One way of turning a file into lines
pub trait ReadStrategy {
    /// Display name used in reports
    fn name(&self) -> &str;

    /// Deliver every line of `path`, decoded as `charset`, to `sink`
    ///
    /// Lines exclude their terminator; `\r\n` and `\n` both end a line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](linebench_core::Error::Io) when the file cannot
    /// be opened or read, [`Error::Decode`](linebench_core::Error::Decode)
    /// for undecodable bytes, and any error raised by the sink unchanged.
    fn read(&self, path: &Path, charset: &'static Encoding, sink: &mut dyn LineSink) -> Result<()>;
}

impl std::fmt::Debug for dyn ReadStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ReadStrategy").field(&self.name()).finish()
    }
}

/// The four strategies in report order
#[must_use]
pub fn default_strategies() -> Vec<Box<dyn ReadStrategy>> {
    vec![
        Box::new(BufReaderStrategy),
        Box::new(LinesStrategy),
        Box::new(ManualBufferStrategy::default()),
        Box::new(MemoryMappedStrategy),
    ]
}
