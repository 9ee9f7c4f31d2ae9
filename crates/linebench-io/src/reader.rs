// SPDX-License-Identifier: MIT OR Apache-2.0
//! Transcoding [`Read`] adapter
//!
//! Wraps any byte source in a given charset and yields UTF-8, so the standard
//! library line readers can be used for every supported encoding.

use encoding_rs::{DecoderResult, Encoding};
use linebench_core::DecodeError;
use std::io::{self, Read};

const DEFAULT_BUF_SIZE: usize = 8 * 1024;

/// [`Read`] adapter decoding `charset` bytes into UTF-8
///
/// Malformed input is never replaced. Text decoded before the offending
/// sequence is returned first; the next read fails with an
/// [`io::ErrorKind::InvalidData`] error wrapping the [`DecodeError`].
pub struct DecodeReader<R> {
    inner: R,
    decoder: encoding_rs::Decoder,
    buf: Box<[u8]>,
    pos: usize,
    filled: usize,
    eof: bool,
    done: bool,
    pending: Option<DecodeError>,
}

impl<R: Read> DecodeReader<R> {
    /// Decode `inner` as `charset`
    #[must_use]
    pub fn new(inner: R, charset: &'static Encoding) -> Self {
        Self {
            inner,
            decoder: charset.new_decoder_without_bom_handling(),
            buf: vec![0; DEFAULT_BUF_SIZE].into_boxed_slice(),
            pos: 0,
            filled: 0,
            eof: false,
            done: false,
            pending: None,
        }
    }

    fn fill(&mut self) -> io::Result<()> {
        self.pos = 0;
        self.filled = 0;
        loop {
            match self.inner.read(&mut self.buf) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.filled = n;
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R> std::fmt::Debug for DecodeReader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodeReader")
            .field("encoding", &self.decoder.encoding().name())
            .field("eof", &self.eof)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl<R: Read> Read for DecodeReader<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if let Some(err) = self.pending.take() {
            return Err(err.into());
        }
        if self.done || out.is_empty() {
            return Ok(0);
        }

        loop {
            if self.pos == self.filled && !self.eof {
                self.fill()?;
            }

            let src = &self.buf[self.pos..self.filled];
            let (result, read, written) =
                self.decoder.decode_to_utf8_without_replacement(src, out, self.eof);
            self.pos += read;

            match result {
                DecoderResult::InputEmpty => {
                    if self.eof {
                        self.done = true;
                        return Ok(written);
                    }
                    if written > 0 {
                        return Ok(written);
                    }
                }
                DecoderResult::OutputFull => {
                    if written > 0 {
                        return Ok(written);
                    }
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "output buffer too small for one character",
                    ));
                }
                DecoderResult::Malformed(length, _) => {
                    self.done = true;
                    let err = DecodeError::Malformed {
                        length: usize::from(length),
                    };
                    if written > 0 {
                        self.pending = Some(err);
                        return Ok(written);
                    }
                    return Err(err.into());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linebench_core::Error;
    use std::io::{BufRead, BufReader};

    /// Source returning one byte per call, interrupted every other call
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        interrupt: bool,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            if self.pos == self.data.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.data[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    #[test]
    fn test_utf8_passthrough() {
        let mut text = String::new();
        DecodeReader::new("héllo\nworld".as_bytes(), encoding_rs::UTF_8)
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "héllo\nworld");
    }

    #[test]
    fn test_latin1_transcoded() {
        let mut text = String::new();
        DecodeReader::new(&b"Amap\xE1"[..], encoding_rs::WINDOWS_1252)
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "Amapá");
    }

    #[test]
    fn test_bom_is_kept() {
        let mut text = String::new();
        DecodeReader::new(&b"\xEF\xBB\xBFx"[..], encoding_rs::UTF_8)
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "\u{FEFF}x");
    }

    #[test]
    fn test_interrupted_source_retried() {
        let source = Trickle {
            data: "ação\n".as_bytes().to_vec(),
            pos: 0,
            interrupt: false,
        };
        let mut text = String::new();
        DecodeReader::new(source, encoding_rs::UTF_8)
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "ação\n");
    }

    #[test]
    fn test_text_before_malformed_is_returned_first() {
        let reader = DecodeReader::new(&b"ok\nbad\xFF\n"[..], encoding_rs::UTF_8);
        let mut lines = BufReader::new(reader).lines();
        assert_eq!(lines.next().unwrap().unwrap(), "ok");
        let err = lines.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(matches!(
            Error::from(err),
            Error::Decode(DecodeError::Malformed { length: 1 })
        ));
    }

    #[test]
    fn test_truncated_sequence_at_eof() {
        let mut text = String::new();
        let err = DecodeReader::new(&b"ab\xC3"[..], encoding_rs::UTF_8)
            .read_to_string(&mut text)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
