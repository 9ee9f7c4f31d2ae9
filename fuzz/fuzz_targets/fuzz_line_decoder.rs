// SPDX-License-Identifier: MIT OR Apache-2.0
//! libFuzzer target for the incremental line decoder
//!
//! Checks that:
//! - Arbitrary bytes never panic in any supported charset
//! - Splitting the input at an arbitrary point yields the same lines and the
//!   same success or failure as decoding it whole
//!
//! Run with: cargo +nightly fuzz run fuzz_line_decoder

#![no_main]

use libfuzzer_sys::fuzz_target;
use linebench_core::Result;
use linebench_io::{Encoding, LineDecoder};

fn charsets() -> [&'static Encoding; 3] {
    [encoding_rs::UTF_8, encoding_rs::WINDOWS_1252, encoding_rs::UTF_16LE]
}

fn decode(charset: &'static Encoding, chunks: &[&[u8]], buffer: usize) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    {
        let mut sink = |line: &str| -> Result<()> {
            lines.push(line.to_string());
            Ok(())
        };
        let mut decoder = LineDecoder::new(charset, buffer);
        let mut carry = Vec::new();
        for (i, chunk) in chunks.iter().enumerate() {
            carry.extend_from_slice(chunk);
            let consumed = decoder.decode(&carry, i + 1 == chunks.len(), &mut sink)?;
            carry.drain(..consumed);
        }
        decoder.finish(&mut sink)?;
    }
    Ok(lines)
}

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let charsets = charsets();
    let charset = charsets[usize::from(selector) % charsets.len()];
    let split = usize::from(selector) % (rest.len() + 1);
    let (head, tail) = rest.split_at(split);

    let whole = decode(charset, &[rest], 8 * 1024);
    let parts = decode(charset, &[head, tail], 16);
    match (whole, parts) {
        (Ok(a), Ok(b)) => assert_eq!(a, b),
        (Err(_), Err(_)) => {}
        (a, b) => panic!("chunking changed the outcome: {a:?} vs {b:?}"),
    }
});
