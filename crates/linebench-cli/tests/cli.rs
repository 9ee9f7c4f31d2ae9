// SPDX-License-Identifier: MIT OR Apache-2.0
//! Full invocations against temporary files

use linebench_cli::{Args, BenchConfig, run};
use std::fs;
use std::path::Path;

const SAMPLE: &str = "uf,tipo_doenca,local_obito,faixa_etaria,sexo,total\n\
AC,OUTRAS,DOMICILIO,\"< 9\",F,11\n\
AL,COVID,OUTRO,10-19,I,3\n\
only,three,columns\n";

fn config(dir: &Path, extra: &[&str]) -> BenchConfig {
    let input = dir.join("input.csv");
    fs::write(&input, SAMPLE).unwrap();
    let report = dir.join("out/report.html");
    let mut argv = vec![
        "linebench".to_string(),
        input.display().to_string(),
        format!("--report={}", report.display()),
    ];
    argv.extend(extra.iter().map(ToString::to_string));
    BenchConfig::from_args(&Args::parse_from_os(argv).unwrap()).unwrap().unwrap()
}

#[test]
fn test_text_report_and_html() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), &["--mode=single"]);
    let mut out = Vec::new();
    run(&config, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("=== File Processing Benchmark ==="));
    assert!(text.contains("Mode: Single-Pass (Realistic)"));
    assert!(!text.contains("Mode: Isolated"));
    for strategy in ["BufReader", "Lines", "ManualBuffer", "MemoryMapped"] {
        assert!(text.contains(&format!("Strategy: {strategy}\n")));
    }
    assert!(text.contains("Records processed: 2\nInvalid lines: 1\nErrors: 1\n"));

    let html = fs::read_to_string(dir.path().join("out/report.html")).unwrap();
    assert!(html.contains("Runs: 1</div>"));
}

#[test]
fn test_both_modes_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), &[]);
    let mut out = Vec::new();
    run(&config, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let single = text.find("Mode: Single-Pass (Realistic)").unwrap();
    let isolated = text.find("Mode: Isolated (Analytical)").unwrap();
    assert!(single < isolated);
}

#[test]
fn test_json_output_with_runs() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), &["--format=json", "--runs=2", "--mode=isolated"]);
    let mut out = Vec::new();
    run(&config, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["mode"], "isolated");
    assert_eq!(value[0]["results"].as_array().unwrap().len(), 4);
    assert_eq!(value[0]["results"][0]["summary"]["records_processed"], 2);

    let html = fs::read_to_string(dir.path().join("out/report.html")).unwrap();
    assert!(html.contains("Runs: 2 (mean +/- std dev)"));
}

#[test]
fn test_unwritable_report_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the report directory should be.
    fs::write(dir.path().join("out"), "blocker").unwrap();
    let config = config(dir.path(), &["--mode=single"]);
    let mut out = Vec::new();
    run(&config, &mut out).unwrap();
    assert!(!out.is_empty());
}
