// SPDX-License-Identifier: MIT OR Apache-2.0
//! Caller-owned buffer feeding the line decoder

use super::ReadStrategy;
use crate::decoder::{DEFAULT_CHAR_BUFFER, LineDecoder};
use crate::sink::LineSink;
use encoding_rs::Encoding;
use linebench_core::Result;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::debug;

const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Raw `File::read` into a fixed buffer, decoded by [`LineDecoder`]
///
/// Bytes the decoder leaves unconsumed are moved to the front of the buffer
/// before the next read.
#[derive(Debug, Clone, Copy)]
pub struct ManualBufferStrategy {
    buffer_size: usize,
}

impl ManualBufferStrategy {
    /// Strategy with an explicit byte buffer size (at least 1)
    #[must_use]
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self {
            buffer_size: buffer_size.max(1),
        }
    }

    /// Size of the byte buffer
    #[must_use]
    pub const fn buffer_size(&self) -> usize {
        self.buffer_size
    }
}

impl Default for ManualBufferStrategy {
    fn default() -> Self {
        Self::with_buffer_size(DEFAULT_BUFFER_SIZE)
    }
}

impl ReadStrategy for ManualBufferStrategy {
    fn name(&self) -> &str {
        "ManualBuffer"
    }

    fn read(&self, path: &Path, charset: &'static Encoding, sink: &mut dyn LineSink) -> Result<()> {
        debug!(
            path = %path.display(),
            charset = charset.name(),
            buffer_size = self.buffer_size,
            "manual buffer read"
        );
        let mut file = File::open(path)?;
        let mut decoder = LineDecoder::new(charset, DEFAULT_CHAR_BUFFER);
        let mut buf = vec![0_u8; self.buffer_size];
        let mut filled = 0;

        loop {
            let n = match file.read(&mut buf[filled..]) {
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if n == 0 {
                break;
            }
            filled += n;

            let consumed = decoder.decode(&buf[..filled], false, sink)?;
            buf.copy_within(consumed..filled, 0);
            filled -= consumed;
            if filled == buf.len() {
                // Decoder is holding a full buffer back; give it more room.
                buf.resize(buf.len() * 2, 0);
            }
        }

        decoder.decode(&buf[..filled], true, sink)?;
        decoder.finish(sink)
    }
}
