// SPDX-License-Identifier: MIT OR Apache-2.0
//! libFuzzer target for the CSV line parser
//!
//! Run with: cargo +nightly fuzz run fuzz_csv_parser

#![no_main]

use libfuzzer_sys::fuzz_target;
use linebench_runner::CsvLineParser;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };
    if let Some(record) = CsvLineParser::parse(line) {
        // Parsed fields are trimmed and never contain quotes.
        for field in [record.uf(), record.disease_type(), record.death_location(), record.age_range(), record.sex()] {
            assert_eq!(field, field.trim());
            assert!(!field.contains('"'));
        }
    }
});
