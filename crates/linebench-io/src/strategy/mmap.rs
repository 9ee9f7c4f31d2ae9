// SPDX-License-Identifier: MIT OR Apache-2.0
//! Memory-mapped reading

use super::ReadStrategy;
use crate::decoder::{DEFAULT_CHAR_BUFFER, LineDecoder};
use crate::sink::LineSink;
use encoding_rs::Encoding;
use linebench_core::Result;
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Maps the whole file and decodes it as one final chunk
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryMappedStrategy;

impl ReadStrategy for MemoryMappedStrategy {
    fn name(&self) -> &str {
        "MemoryMapped"
    }

    fn read(&self, path: &Path, charset: &'static Encoding, sink: &mut dyn LineSink) -> Result<()> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        debug!(path = %path.display(), charset = charset.name(), len, "memory-mapped read");
        if len == 0 {
            return Ok(());
        }

        // SAFETY: the mapping is read-only and dropped before returning. The
        // file must not be truncated by another process while it is mapped.
        let map = unsafe { Mmap::map(&file)? };
        let mut decoder = LineDecoder::new(charset, DEFAULT_CHAR_BUFFER);
        decoder.decode(&map, true, sink)?;
        decoder.finish(sink)
    }
}
