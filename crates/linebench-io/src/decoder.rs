// SPDX-License-Identifier: MIT OR Apache-2.0
//! Incremental byte-to-line decoder
//!
//! Bytes of one logical stream arrive in any number of chunks. Each chunk is
//! decoded into a bounded character buffer; whenever that buffer fills up
//! ([`CoderResult::Overflow`]) it is drained and decoding resumes with the
//! remaining input, until the decoder reports the chunk consumed
//! ([`CoderResult::Underflow`]).
//!
//! Draining scans the decoded text for `\n` (ends a line) and `\r` (dropped).
//! The pending line survives between calls, so a line split across chunk
//! boundaries is reassembled.

use crate::charset::{CharsetDecoder, CoderResult, EncodingDecoder};
use crate::sink::LineSink;
use encoding_rs::Encoding;
use linebench_core::Result;
use memchr::memchr2_iter;

/// Default size of the decoded character buffer
pub const DEFAULT_CHAR_BUFFER: usize = 8 * 1024;

/// Smallest character buffer; always holds one scalar value
const MIN_CHAR_BUFFER: usize = 16;

/// Stateful decoder turning byte chunks into lines
///
/// One instance per read attempt. Call [`decode`](Self::decode) for every
/// chunk and [`finish`](Self::finish) exactly once at the end.
#[derive(Debug)]
pub struct LineDecoder<D = EncodingDecoder> {
    decoder: D,
    chars: String,
    line: String,
}

impl LineDecoder<EncodingDecoder> {
    /// Decoder for `encoding` with a character buffer of `buffer_size` bytes
    #[must_use]
    pub fn new(encoding: &'static Encoding, buffer_size: usize) -> Self {
        Self::with_decoder(EncodingDecoder::new(encoding), buffer_size)
    }
}

impl<D: CharsetDecoder> LineDecoder<D> {
    /// Line decoder over an arbitrary [`CharsetDecoder`]
    #[must_use]
    pub fn with_decoder(decoder: D, buffer_size: usize) -> Self {
        let capacity = buffer_size.max(MIN_CHAR_BUFFER);
        Self {
            decoder,
            chars: String::with_capacity(capacity),
            line: String::with_capacity(capacity),
        }
    }

    /// Decode one chunk, emitting every line it completes
    ///
    /// Returns the number of bytes consumed; unconsumed bytes must be passed
    /// again at the start of the next chunk. `last` marks the final chunk.
    ///
    /// # Errors
    ///
    /// Returns a decode error for malformed or unmappable input, or the
    /// sink's own error.
    pub fn decode(&mut self, chunk: &[u8], last: bool, sink: &mut dyn LineSink) -> Result<usize> {
        let mut remaining = chunk;
        loop {
            let (result, read) = self.decoder.decode(remaining, &mut self.chars, last);
            remaining = &remaining[read..];
            self.drain(sink)?;
            if result.is_done()? {
                return Ok(chunk.len() - remaining.len());
            }
        }
    }

    /// Flush decoder state and emit a trailing unterminated line
    ///
    /// # Errors
    ///
    /// Returns a decode error if the stream ends inside a sequence, or the
    /// sink's own error.
    pub fn finish(&mut self, sink: &mut dyn LineSink) -> Result<()> {
        loop {
            let result = self.decoder.flush(&mut self.chars);
            self.drain(sink)?;
            if result.is_done()? {
                break;
            }
        }

        if !self.line.is_empty() {
            sink.accept(&self.line)?;
            self.line.clear();
        }
        Ok(())
    }

    fn drain(&mut self, sink: &mut dyn LineSink) -> Result<()> {
        let Self { chars, line, .. } = self;
        let bytes = chars.as_bytes();
        let mut start = 0;

        for pos in memchr2_iter(b'\n', b'\r', bytes) {
            line.push_str(&chars[start..pos]);
            start = pos + 1;
            if bytes[pos] == b'\n' {
                sink.accept(line)?;
                line.clear();
            }
        }

        line.push_str(&chars[start..]);
        chars.clear();
        Ok(())
    }
}
