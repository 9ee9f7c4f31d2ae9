// SPDX-License-Identifier: MIT OR Apache-2.0
//! Charset decoding seam
//!
//! [`CharsetDecoder`] is the single step the [`LineDecoder`](crate::LineDecoder)
//! drives: decode as much input as fits into the output buffer and say why it
//! stopped. Running out of input or output space are ordinary outcomes and are
//! reported through [`CoderResult`], not as errors.

use encoding_rs::{DecoderResult, Encoding};
use linebench_core::{DecodeError, Error, Result};

/// Why a decoding step stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoderResult {
    /// All available input was consumed
    Underflow,
    /// The output buffer is full; drain it and call again
    Overflow,
    /// Illegal byte sequence of the given length
    Malformed {
        /// Offending sequence length in bytes
        length: usize,
    },
    /// Legal sequence with no mapping, of the given length
    Unmappable {
        /// Offending sequence length in bytes
        length: usize,
    },
}

impl CoderResult {
    /// Whether the step finished with all input consumed
    ///
    /// # Errors
    ///
    /// Returns the matching [`DecodeError`] for malformed or unmappable input.
    pub const fn is_done(self) -> std::result::Result<bool, DecodeError> {
        match self {
            Self::Underflow => Ok(true),
            Self::Overflow => Ok(false),
            Self::Malformed { length } => Err(DecodeError::Malformed { length }),
            Self::Unmappable { length } => Err(DecodeError::Unmappable { length }),
        }
    }
}

/// Incremental bytes-to-text decoder for one logical stream
pub trait CharsetDecoder {
    /// Decode `src` into the spare capacity of `dst`
    ///
    /// Returns the outcome and the number of bytes of `src` consumed. `dst`
    /// must not grow beyond its capacity; [`CoderResult::Overflow`] is reported
    /// when it is full. `last` marks the end of the stream.
    fn decode(&mut self, src: &[u8], dst: &mut String, last: bool) -> (CoderResult, usize);

    /// Emit any state still buffered inside the decoder
    fn flush(&mut self, dst: &mut String) -> CoderResult;
}

/// [`CharsetDecoder`] backed by `encoding_rs`
///
/// Byte order marks are not stripped, so every read strategy sees the same
/// characters.
pub struct EncodingDecoder {
    inner: encoding_rs::Decoder,
    finished: bool,
}

impl EncodingDecoder {
    /// Decoder for `encoding`
    #[must_use]
    pub fn new(encoding: &'static Encoding) -> Self {
        Self {
            inner: encoding.new_decoder_without_bom_handling(),
            finished: false,
        }
    }
}

impl std::fmt::Debug for EncodingDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodingDecoder")
            .field("encoding", &self.inner.encoding().name())
            .field("finished", &self.finished)
            .finish()
    }
}

impl CharsetDecoder for EncodingDecoder {
    fn decode(&mut self, src: &[u8], dst: &mut String, last: bool) -> (CoderResult, usize) {
        // encoding_rs decoders must not be used after the final call.
        if self.finished {
            debug_assert!(src.is_empty(), "input after end of stream");
            return (CoderResult::Underflow, 0);
        }
        let (result, read) = self.inner.decode_to_string_without_replacement(src, dst, last);
        let outcome = match result {
            DecoderResult::InputEmpty => {
                self.finished = last;
                CoderResult::Underflow
            }
            DecoderResult::OutputFull => CoderResult::Overflow,
            DecoderResult::Malformed(length, _) => CoderResult::Malformed {
                length: usize::from(length),
            },
        };
        (outcome, read)
    }

    fn flush(&mut self, dst: &mut String) -> CoderResult {
        if self.finished {
            return CoderResult::Underflow;
        }
        self.decode(&[], dst, true).0
    }
}

/// Resolve a charset label such as `UTF-8`, `latin1` or `utf-16le`
///
/// # Errors
///
/// Returns [`Error::UnsupportedCharset`] for unknown labels.
pub fn charset_for_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| Error::UnsupportedCharset(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(charset_for_label("UTF-8").unwrap(), encoding_rs::UTF_8);
        assert_eq!(charset_for_label(" utf8 ").unwrap(), encoding_rs::UTF_8);
        assert_eq!(charset_for_label("latin1").unwrap(), encoding_rs::WINDOWS_1252);
        assert_eq!(charset_for_label("UTF-16LE").unwrap(), encoding_rs::UTF_16LE);
    }

    #[test]
    fn test_unknown_label() {
        let err = charset_for_label("klingon").unwrap_err();
        assert!(matches!(err, Error::UnsupportedCharset(ref name) if name == "klingon"));
    }

    #[test]
    fn test_coder_result_outcomes() {
        assert_eq!(CoderResult::Underflow.is_done(), Ok(true));
        assert_eq!(CoderResult::Overflow.is_done(), Ok(false));
        assert_eq!(
            CoderResult::Malformed { length: 1 }.is_done(),
            Err(DecodeError::Malformed { length: 1 })
        );
        assert_eq!(
            CoderResult::Unmappable { length: 2 }.is_done(),
            Err(DecodeError::Unmappable { length: 2 })
        );
    }

    #[test]
    fn test_overflow_when_output_full() {
        let mut decoder = EncodingDecoder::new(encoding_rs::UTF_8);
        let mut out = String::with_capacity(4);
        let input = "abcdefgh".as_bytes();
        let (result, read) = decoder.decode(input, &mut out, false);
        assert_eq!(result, CoderResult::Overflow);
        assert!(read < input.len());
        assert_eq!(out.len(), read);
    }

    #[test]
    fn test_truncated_sequence_is_malformed_on_flush() {
        let mut decoder = EncodingDecoder::new(encoding_rs::UTF_8);
        let mut out = String::with_capacity(16);
        // First byte of a two byte sequence; waits for more input.
        let (result, read) = decoder.decode(&[0xC3], &mut out, false);
        assert_eq!((result, read), (CoderResult::Underflow, 1));
        assert_eq!(decoder.flush(&mut out), CoderResult::Malformed { length: 1 });
    }

    #[test]
    fn test_flush_after_final_chunk_is_noop() {
        let mut decoder = EncodingDecoder::new(encoding_rs::UTF_8);
        let mut out = String::with_capacity(16);
        let (result, _) = decoder.decode(b"ok", &mut out, true);
        assert_eq!(result, CoderResult::Underflow);
        assert_eq!(decoder.flush(&mut out), CoderResult::Underflow);
        assert_eq!(out, "ok");
    }
}
