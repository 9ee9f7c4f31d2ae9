// SPDX-License-Identifier: MIT OR Apache-2.0
//! Lazy line iterator

use super::ReadStrategy;
use crate::reader::DecodeReader;
use crate::sink::LineSink;
use encoding_rs::Encoding;
use linebench_core::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Walks [`BufRead::lines`], one freshly allocated `String` per line
#[derive(Debug, Clone, Copy, Default)]
pub struct LinesStrategy;

impl ReadStrategy for LinesStrategy {
    fn name(&self) -> &str {
        "Lines"
    }

    fn read(&self, path: &Path, charset: &'static Encoding, sink: &mut dyn LineSink) -> Result<()> {
        debug!(path = %path.display(), charset = charset.name(), "line iterator read");
        let file = File::open(path)?;
        for line in BufReader::new(DecodeReader::new(file, charset)).lines() {
            sink.accept(&line?)?;
        }
        Ok(())
    }
}
