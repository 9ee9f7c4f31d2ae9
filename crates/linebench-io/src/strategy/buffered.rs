// SPDX-License-Identifier: MIT OR Apache-2.0
//! Buffered stream reading with `read_line`

use super::ReadStrategy;
use crate::reader::DecodeReader;
use crate::sink::LineSink;
use encoding_rs::Encoding;
use linebench_core::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Reads through a [`BufReader`], reusing one `String` for every line
#[derive(Debug, Clone, Copy, Default)]
pub struct BufReaderStrategy;

impl ReadStrategy for BufReaderStrategy {
    fn name(&self) -> &str {
        "BufReader"
    }

    fn read(&self, path: &Path, charset: &'static Encoding, sink: &mut dyn LineSink) -> Result<()> {
        debug!(path = %path.display(), charset = charset.name(), "buffered read");
        let file = File::open(path)?;
        let mut reader = BufReader::new(DecodeReader::new(file, charset));
        let mut line = String::new();

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Ok(());
            }
            if line.ends_with('\n') {
                line.pop();
                if line.ends_with('\r') {
                    line.pop();
                }
            }
            sink.accept(&line)?;
        }
    }
}
