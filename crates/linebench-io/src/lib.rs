// SPDX-License-Identifier: MIT OR Apache-2.0
//! Line decoding and file read strategies for linebench
//!
//! Turns files into sequences of text lines in four interchangeable ways:
//!
//! - [`decoder`] - Incremental byte-to-line state machine over a [`charset`] decoder
//! - [`reader`] - `io::Read` adapter that transcodes any charset to UTF-8
//! - [`strategy`] - The [`ReadStrategy`] trait and its four variants
//! - [`sink`] - The [`LineSink`] receiving one line at a time
//!
//! All strategies yield the same lines for the same file and charset. Only the
//! way bytes are obtained from storage differs.

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

/// Charset decoder seam and `encoding_rs` adapter
pub mod charset;
/// Incremental line decoder
pub mod decoder;
/// Transcoding reader
pub mod reader;
/// Line sink trait
pub mod sink;
/// File read strategies
pub mod strategy;

pub use charset::{CharsetDecoder, CoderResult, EncodingDecoder, charset_for_label};
pub use decoder::LineDecoder;
pub use encoding_rs::{Encoding, UTF_8};
pub use reader::DecodeReader;
pub use sink::LineSink;
pub use strategy::{
    BufReaderStrategy, LinesStrategy, ManualBufferStrategy, MemoryMappedStrategy, ReadStrategy,
    default_strategies,
};
