// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for linebench
//!
//! Decoding failures carry the byte length of the offending sequence. I/O
//! errors that merely wrap a [`DecodeError`] (as produced by a transcoding
//! reader) are unwrapped back into [`Error::Decode`] on conversion.

use std::io;
use thiserror::Error;

/// A byte sequence that could not be decoded with the active charset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input is not a legal sequence for the charset
    #[error("malformed input: {length} byte(s)")]
    Malformed {
        /// Length of the offending sequence in bytes
        length: usize,
    },
    /// The input is legal but has no mapping in the output character set
    #[error("unmappable character: {length} byte(s)")]
    Unmappable {
        /// Length of the offending sequence in bytes
        length: usize,
    },
}

impl DecodeError {
    /// Byte length of the offending sequence
    #[must_use]
    pub const fn length(&self) -> usize {
        match self {
            Self::Malformed { length } | Self::Unmappable { length } => *length,
        }
    }
}

/// Errors that can occur while reading and processing a file
#[derive(Debug, Error)]
pub enum Error {
    /// Bad byte sequence for the active charset
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// File missing, mapping failure or read failure
    #[error("I/O failure: {0}")]
    Io(io::Error),

    /// The requested charset label is not known
    #[error("unsupported charset: {0}")]
    UnsupportedCharset(String),

    /// Failure raised by line sink, parser or scenario logic
    #[error("{0}")]
    Application(String),
}

impl Error {
    /// Build an application error from any displayable message
    pub fn application(message: impl Into<String>) -> Self {
        Self::Application(message.into())
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        match err
            .get_ref()
            .and_then(|inner| inner.downcast_ref::<DecodeError>())
        {
            Some(decode) => Self::Decode(*decode),
            None => Self::Io(err),
        }
    }
}

impl From<DecodeError> for io::Error {
    fn from(err: DecodeError) -> Self {
        Self::new(io::ErrorKind::InvalidData, err)
    }
}

/// Result type alias for linebench operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_length() {
        assert_eq!(DecodeError::Malformed { length: 2 }.length(), 2);
        assert_eq!(DecodeError::Unmappable { length: 1 }.length(), 1);
    }

    #[test]
    fn test_decode_error_display() {
        let err = Error::from(DecodeError::Malformed { length: 3 });
        assert_eq!(err.to_string(), "malformed input: 3 byte(s)");
    }

    #[test]
    fn test_io_error_wrapping_decode_error_is_unwrapped() {
        let io_err: io::Error = DecodeError::Unmappable { length: 1 }.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);

        let err = Error::from(io_err);
        assert!(matches!(
            err,
            Error::Decode(DecodeError::Unmappable { length: 1 })
        ));
    }

    #[test]
    fn test_plain_io_error_stays_io() {
        let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_application_error_message_is_verbatim() {
        assert_eq!(Error::application("boom").to_string(), "boom");
    }
}
