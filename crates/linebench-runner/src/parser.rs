// SPDX-License-Identifier: MIT OR Apache-2.0
//! Quote-aware CSV line parsing

use linebench_core::CsvRecord;
use smallvec::SmallVec;

const FIELD_COUNT: usize = 6;

/// Parses dataset lines into [`CsvRecord`]s
///
/// Fields are split on commas outside double quotes. Quote characters only
/// toggle the quoted state and never reach the field text. Every field is
/// trimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvLineParser;

impl CsvLineParser {
    /// Parse one line, `None` when it is not a valid record
    ///
    /// A valid record has exactly six fields and an integer last field.
    #[must_use]
    pub fn parse(line: &str) -> Option<CsvRecord> {
        if line.trim().is_empty() {
            return None;
        }

        let mut fields: SmallVec<[String; FIELD_COUNT]> = SmallVec::new();
        let mut current = String::new();
        let mut quoted = false;
        for c in line.chars() {
            match c {
                '"' => quoted = !quoted,
                ',' if !quoted => {
                    fields.push(current.trim().to_string());
                    current.clear();
                }
                _ => current.push(c),
            }
        }
        fields.push(current.trim().to_string());

        if fields.len() != FIELD_COUNT {
            return None;
        }
        let total = fields[5].parse::<i64>().ok()?;
        let mut fields = fields.into_iter();
        Some(CsvRecord::new(
            fields.next()?,
            fields.next()?,
            fields.next()?,
            fields.next()?,
            fields.next()?,
            total,
        ))
    }
}
