// SPDX-License-Identifier: MIT OR Apache-2.0
//! Every read strategy yields the same lines for the same file

use linebench_core::{DecodeError, Error, Result};
use linebench_io::{
    Encoding, LineSink, ManualBufferStrategy, ReadStrategy, UTF_8, default_strategies,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

fn all_strategies() -> Vec<Box<dyn ReadStrategy>> {
    let mut strategies = default_strategies();
    // Tiny buffer forces lines and characters to straddle reads.
    strategies.push(Box::new(ManualBufferStrategy::with_buffer_size(3)));
    strategies
}

fn read_lines(strategy: &dyn ReadStrategy, file: &NamedTempFile, charset: &'static Encoding) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut sink = |line: &str| -> Result<()> {
        lines.push(line.to_string());
        Ok(())
    };
    strategy.read(file.path(), charset, &mut sink)?;
    Ok(lines)
}

fn assert_all_equal(bytes: &[u8], charset: &'static Encoding, expected: &[&str]) {
    let file = write_file(bytes);
    for strategy in all_strategies() {
        let lines = read_lines(strategy.as_ref(), &file, charset)
            .unwrap_or_else(|e| panic!("{} failed: {e}", strategy.name()));
        assert_eq!(lines, expected, "strategy {}", strategy.name());
    }
}

#[test]
fn test_lf_terminated() {
    assert_all_equal(b"uf,total\nAC,1\nAL,2\n", UTF_8, &["uf,total", "AC,1", "AL,2"]);
}

#[test]
fn test_crlf_terminated() {
    assert_all_equal(b"uf,total\r\nAC,1\r\nAL,2\r\n", UTF_8, &["uf,total", "AC,1", "AL,2"]);
}

#[test]
fn test_missing_final_newline() {
    assert_all_equal(b"a\nlast", UTF_8, &["a", "last"]);
}

#[test]
fn test_empty_lines_kept() {
    assert_all_equal(b"a\n\n\nb\n", UTF_8, &["a", "", "", "b"]);
}

#[test]
fn test_empty_file() {
    assert_all_equal(b"", UTF_8, &[]);
}

#[test]
fn test_header_only() {
    assert_all_equal(b"uf,tipo_doenca,local_obito,faixa_etaria,sexo,total\n", UTF_8, &[
        "uf,tipo_doenca,local_obito,faixa_etaria,sexo,total",
    ]);
}

#[test]
fn test_multibyte_utf8() {
    assert_all_equal("São Paulo,ação\nAmapá\n".as_bytes(), UTF_8, &["São Paulo,ação", "Amapá"]);
}

#[test]
fn test_windows_1252() {
    assert_all_equal(b"S\xE3o Paulo\r\nAmap\xE1", encoding_rs::WINDOWS_1252, &["São Paulo", "Amapá"]);
}

#[test]
fn test_utf16le() {
    let bytes: Vec<u8> = "uf\r\nSÃO\nx".encode_utf16().flat_map(u16::to_le_bytes).collect();
    assert_all_equal(&bytes, encoding_rs::UTF_16LE, &["uf", "SÃO", "x"]);
}

#[test]
fn test_long_lines_cross_buffers() {
    let long = "x".repeat(20_000);
    let text = format!("{long}\n{long}é\n");
    let with_accent = format!("{long}é");
    assert_all_equal(text.as_bytes(), UTF_8, &[long.as_str(), with_accent.as_str()]);
}

#[test]
fn test_malformed_bytes_fail_every_strategy() {
    let file = write_file(b"good\nbad\xFF\nnever\n");
    for strategy in all_strategies() {
        let mut seen = Vec::new();
        let mut sink = |line: &str| -> Result<()> {
            seen.push(line.to_string());
            Ok(())
        };
        let err = strategy.read(file.path(), UTF_8, &mut sink).unwrap_err();
        assert!(
            matches!(err, Error::Decode(DecodeError::Malformed { .. })),
            "strategy {} returned {err:?}",
            strategy.name()
        );
        assert_eq!(seen, ["good"], "strategy {}", strategy.name());
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");
    for strategy in all_strategies() {
        let mut sink = |_: &str| -> Result<()> { Ok(()) };
        let err = strategy.read(&path, UTF_8, &mut sink).unwrap_err();
        assert!(matches!(err, Error::Io(_)), "strategy {}", strategy.name());
    }
}

struct StopAfter {
    remaining: usize,
}

impl LineSink for StopAfter {
    fn accept(&mut self, _line: &str) -> Result<()> {
        if self.remaining == 0 {
            return Err(Error::application("sink full"));
        }
        self.remaining -= 1;
        Ok(())
    }
}

#[test]
fn test_sink_error_is_returned_unchanged() {
    let file = write_file(b"1\n2\n3\n");
    for strategy in all_strategies() {
        let mut sink = StopAfter { remaining: 2 };
        let err = strategy.read(file.path(), UTF_8, &mut sink).unwrap_err();
        assert!(
            matches!(err, Error::Application(ref msg) if msg == "sink full"),
            "strategy {}",
            strategy.name()
        );
    }
}
