//! Integration tests for the origin CLI
//!
//! These tests invoke the actual binary and verify:
//! - Exit codes (0 = success, 1 = check found errors, 2 = fatal error)
//! - stdout/stderr output
//! - The shape of the written dataset

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────

const RECORDS: &str = r#"[
  {"Ballotpedia URL": "https://ballotpedia.org/Jane_Doe", "contact_type": "Website", "contact": "https://Jane-Doe.example.org/"},
  {"Ballotpedia URL": "https://ballotpedia.org/Jane_Doe", "contact_type": "Instagram", "contact": "https://instagram.com/janedoe"},
  {"Ballotpedia URL": "https://ballotpedia.org/John_Smith", "contact_type": "Twitter", "contact": "jsmith"},
  {"Ballotpedia URL": "https://ballotpedia.org/John_Smith", "contact_type": "Facebook", "contact": "https://facebook.com/profile.php?id=100012345"},
  {"Ballotpedia URL": "https://ballotpedia.org/Jane_Doe", "contact_type": "YouTube", "contact": "https://youtube.com/channel/UC123/"}
]"#;

const RECORDS_WITH_UNSUPPORTED: &str = r#"[
  {"Ballotpedia URL": "https://ballotpedia.org/Jane_Doe", "contact_type": "TikTok", "contact": "@janedoe"},
  {"Ballotpedia URL": "https://ballotpedia.org/Jane_Doe", "contact_type": "X", "contact": "janedoe"}
]"#;

fn run_origin(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_origin"))
        .args(args)
        .output()
        .expect("failed to execute origin")
}

/// Write a records file and a small logo into `dir`.
fn write_fixtures(dir: &Path, records: &str) -> (PathBuf, PathBuf) {
    let records_path = dir.join("records.json");
    let logo_path = dir.join("logo.png");
    fs::write(&records_path, records).expect("write records fixture");
    fs::write(&logo_path, b"not-a-real-png").expect("write logo fixture");
    (records_path, logo_path)
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("fixture path is valid UTF-8")
}

// ── Convert ───────────────────────────────────────────────

#[test]
fn test_convert_writes_expected_dataset() {
    let dir = TempDir::new().unwrap();
    let (records, logo) = write_fixtures(dir.path(), RECORDS);
    let output = dir.path().join("out.json");

    let result = run_origin(&[
        "convert",
        path_str(&records),
        path_str(&logo),
        "-o",
        path_str(&output),
    ]);
    assert!(result.status.success(), "convert should exit 0");

    let written = fs::read_to_string(&output).expect("output file should exist");
    let dataset: serde_json::Value = serde_json::from_str(&written).unwrap();

    assert_eq!(dataset["entry"][0], "Jane_Doe");
    assert_eq!(dataset["entry"][1], "John_Smith");

    let tables = &dataset["contactTables"];
    assert_eq!(tables["Website"]["jane-doe.example.org"], 0);
    assert_eq!(tables["Instagram"]["janedoe"], 0);
    // The legacy Twitter label lands in the X table.
    assert_eq!(tables["X"]["jsmith"], 1);
    assert_eq!(tables["Facebook"]["profile.php?id=100012345"], 1);
    assert_eq!(tables["YouTube"]["channel/UC123"], 0);
}

#[test]
fn test_convert_embeds_descriptor_defaults() {
    let dir = TempDir::new().unwrap();
    let (records, logo) = write_fixtures(dir.path(), RECORDS);
    let output = dir.path().join("out.json");

    let result = run_origin(&[
        "convert",
        path_str(&records),
        path_str(&logo),
        "-o",
        path_str(&output),
    ]);
    assert!(result.status.success());

    let written = fs::read_to_string(&output).unwrap();
    let dataset: serde_json::Value = serde_json::from_str(&written).unwrap();

    assert_eq!(dataset["source"]["name"], "Ballotpedia");
    assert_eq!(dataset["source"]["website"], "https://www.ballotpedia.org");
    let logo_url = dataset["source"]["logo"].as_str().unwrap();
    assert!(logo_url.starts_with("data:image/png;base64,"));
    let platforms = dataset["source"]["supportedPlatforms"].as_array().unwrap();
    assert_eq!(platforms.len(), 5);
    assert!(platforms.contains(&serde_json::json!("X")));
}

#[test]
fn test_convert_honors_descriptor_overrides() {
    let dir = TempDir::new().unwrap();
    let (records, logo) = write_fixtures(dir.path(), RECORDS);
    let output = dir.path().join("out.json");

    let result = run_origin(&[
        "convert",
        path_str(&records),
        path_str(&logo),
        "-o",
        path_str(&output),
        "--source-name",
        "Example Registry",
        "--source-website",
        "https://registry.example.org",
    ]);
    assert!(result.status.success());

    let written = fs::read_to_string(&output).unwrap();
    let dataset: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(dataset["source"]["name"], "Example Registry");
    assert_eq!(dataset["source"]["website"], "https://registry.example.org");
}

#[test]
fn test_convert_prints_summary_counts() {
    let dir = TempDir::new().unwrap();
    let (records, logo) = write_fixtures(dir.path(), RECORDS);
    let output = dir.path().join("out.json");

    let result = run_origin(&[
        "convert",
        path_str(&records),
        path_str(&logo),
        "-o",
        path_str(&output),
    ]);
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("5 records, 2 candidates"));
    assert!(stdout.contains("Website entries: 1"));
    assert!(stdout.contains("YouTube entries: 1"));
}

#[test]
fn test_convert_quiet_suppresses_summary() {
    let dir = TempDir::new().unwrap();
    let (records, logo) = write_fixtures(dir.path(), RECORDS);
    let output = dir.path().join("out.json");

    let result = run_origin(&[
        "convert",
        path_str(&records),
        path_str(&logo),
        "-o",
        path_str(&output),
        "--quiet",
    ]);
    assert!(result.status.success());
    assert!(result.stdout.is_empty());
}

#[test]
fn test_convert_continues_past_unsupported_platform() {
    let dir = TempDir::new().unwrap();
    let (records, logo) = write_fixtures(dir.path(), RECORDS_WITH_UNSUPPORTED);
    let output = dir.path().join("out.json");

    let result = run_origin(&[
        "convert",
        path_str(&records),
        path_str(&logo),
        "-o",
        path_str(&output),
    ]);
    // Record-level problems never fail a conversion.
    assert!(result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("unsupported-platform"));
    assert!(stderr.contains("TikTok"));

    let written = fs::read_to_string(&output).unwrap();
    let dataset: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(dataset["contactTables"]["X"]["janedoe"], 0);
}

#[test]
fn test_convert_missing_records_exits_two() {
    let dir = TempDir::new().unwrap();
    let (_, logo) = write_fixtures(dir.path(), RECORDS);

    let result = run_origin(&["convert", "no-such-file.json", path_str(&logo)]);
    assert_eq!(result.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("no-such-file.json"));
}

#[test]
fn test_convert_missing_logo_exits_two() {
    let dir = TempDir::new().unwrap();
    let (records, _) = write_fixtures(dir.path(), RECORDS);

    let result = run_origin(&["convert", path_str(&records), "no-such-logo.jpg"]);
    assert_eq!(result.status.code(), Some(2));
}

#[test]
fn test_convert_malformed_records_exits_two() {
    let dir = TempDir::new().unwrap();
    let (records, logo) = write_fixtures(dir.path(), "{not json");

    let result = run_origin(&["convert", path_str(&records), path_str(&logo)]);
    assert_eq!(result.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("failed to parse"));
}

// ── Check ─────────────────────────────────────────────────

#[test]
fn test_check_clean_export_exits_zero() {
    let dir = TempDir::new().unwrap();
    let (records, _) = write_fixtures(dir.path(), RECORDS);

    let result = run_origin(&["check", path_str(&records)]);
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("5 records, 2 candidates, 0 diagnostics"));
}

#[test]
fn test_check_unsupported_platform_exits_one() {
    let dir = TempDir::new().unwrap();
    let (records, _) = write_fixtures(dir.path(), RECORDS_WITH_UNSUPPORTED);

    let result = run_origin(&["check", path_str(&records)]);
    assert_eq!(result.status.code(), Some(1));
}

#[test]
fn test_check_json_output() {
    let dir = TempDir::new().unwrap();
    let (records, _) = write_fixtures(dir.path(), RECORDS_WITH_UNSUPPORTED);

    let result = run_origin(&["check", "--json", path_str(&records)]);
    assert_eq!(result.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&result.stdout);
    let diagnostics: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let list = diagnostics.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["severity"], "error");
    assert_eq!(list[0]["kind"], "unsupported-platform");
    assert_eq!(list[0]["candidate"], "Jane_Doe");
    assert_eq!(list[0]["platform"], "TikTok");
}

#[test]
fn test_check_missing_file_exits_two() {
    let result = run_origin(&["check", "no-such-file.json"]);
    assert_eq!(result.status.code(), Some(2));
}
