use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_cli_help() {
    let mut cmd = cargo::cargo_bin_cmd!("pagescore");
    let assert = cmd.arg("--help").assert();

    // On Windows, the binary name in help might be "pagescore.exe"
    let expected_pattern = if cfg!(windows) {
        "pagescore.exe [OPTIONS] <INPUT>..."
    } else {
        "pagescore [OPTIONS] <INPUT>..."
    };

    assert
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains(expected_pattern));
}

#[test]
fn test_cli_requires_input() {
    let mut cmd = cargo::cargo_bin_cmd!("pagescore");
    cmd.assert().failure();
}

#[test]
fn test_cli_json_output() {
    let dir = tempdir().unwrap();
    let page_path = dir.path().join("page.yaml");
    fs::write(
        &page_path,
        "title: Acme WebDev Guides for Modern Teams\nhas_sitemap: true\n",
    )
    .unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("pagescore");
    cmd.arg(&page_path)
        .args(["-k", "webdev", "-b", "Acme", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"overall_score\""))
        .stdout(predicate::str::contains("\"priority\": \"high\""));
}

#[test]
fn test_cli_reports_null_field_error() {
    let dir = tempdir().unwrap();
    let page_path = dir.path().join("page.json");
    fs::write(&page_path, r#"{ "description": null }"#).unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("pagescore");
    cmd.arg(&page_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid page description"));
}

#[test]
fn test_cli_json_output_with_save_is_valid_json() {
    let dir = tempdir().unwrap();
    let page_path = dir.path().join("page.json");
    let report_path = dir.path().join("report.json");
    fs::write(&page_path, r#"{ "title": "Acme WebDev Guides for Modern Teams" }"#).unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("pagescore");
    let assert = cmd
        .arg(&page_path)
        .args(["-k", "webdev", "-o", "json", "-s"])
        .arg(&report_path)
        .assert()
        .success();

    let stdout = &assert.get_output().stdout;
    let printed: serde_json::Value =
        serde_json::from_slice(stdout).expect("stdout should be a single JSON document");
    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(printed["summary"], saved["summary"]);
    assert_eq!(printed["pages"][0]["source"], saved["pages"][0]["source"]);
}
