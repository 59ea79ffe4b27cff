use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const RESUME: &str = "\
ARCHANA BHAGAT
archana.bhagat@gmail.com | Mobile: +91 98765 43210
Pune, Maharashtra

PERSONAL DETAILS
Date of Birth: 19 November 2004
Gender: Female
";

fn cvscan() -> Command {
    let mut cmd: Command = cargo_bin_cmd!("cvscan").into();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_file(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

fn reports(stdout: &[u8]) -> Vec<Value> {
    serde_json::from_slice(stdout).unwrap()
}

// --- Binary startup ---

#[test]
fn binary_runs() {
    cvscan()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cvscan"));
}

#[test]
fn requires_a_path() {
    cvscan().assert().failure();
}

// --- Extraction ---

#[test]
fn scans_text_file() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "archana.txt", RESUME);

    let output = cvscan().arg(&file).output().unwrap();
    assert!(output.status.success());

    let reports = reports(&output.stdout);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["status"], "success");
    assert_eq!(reports[0]["file"], "archana.txt");
    assert_eq!(reports[0]["id"].as_str().map(str::len), Some(36));
    assert_eq!(reports[0]["content_hash"].as_str().map(str::len), Some(16));

    let data = &reports[0]["data"];
    assert_eq!(data["name"], "Archana Bhagat");
    assert_eq!(data["email"], "archana.bhagat@gmail.com");
    assert_eq!(data["mobile"], "9876543210");
    assert_eq!(data["dob"], "2004-11-19");
    assert_eq!(data["gender"], "Female");
}

#[test]
fn missing_fields_use_defaults() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(
        tmp.path(),
        "sparse.txt",
        "Worked on several backend services and internal tooling.",
    );

    let output = cvscan().arg(&file).output().unwrap();
    assert!(output.status.success());

    let data = &reports(&output.stdout)[0]["data"];
    assert_eq!(data["dob"], "NA");
    assert_eq!(data["gender"], "Not Specified");
    assert!(data["email"].is_null());
    assert!(data["mobile"].is_null());
}

#[test]
fn reads_stdin() {
    let output = cvscan().arg("-").write_stdin(RESUME).output().unwrap();
    assert!(output.status.success());

    let reports = reports(&output.stdout);
    assert_eq!(reports[0]["file"], "<stdin>");
    assert_eq!(reports[0]["data"]["name"], "Archana Bhagat");
}

#[test]
fn reports_keep_argument_order() {
    let tmp = TempDir::new().unwrap();
    let good = write_file(tmp.path(), "b.txt", RESUME);
    let short = write_file(tmp.path(), "a.txt", "Jane Doe");

    let output = cvscan().args([&good, &short]).output().unwrap();
    assert!(output.status.success());

    let reports = reports(&output.stdout);
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["file"], "b.txt");
    assert_eq!(reports[0]["status"], "success");
    assert_eq!(reports[1]["file"], "a.txt");
    assert_eq!(reports[1]["status"], "failed");
    assert!(reports[1]["error"].as_str().unwrap().contains("too short"));
}

#[test]
fn scans_directory() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "one.txt", RESUME);
    write_file(tmp.path(), "two.md", RESUME);

    let output = cvscan().arg(tmp.path()).output().unwrap();
    assert!(output.status.success());

    let reports = reports(&output.stdout);
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["file"], "one.txt");
    assert_eq!(reports[1]["file"], "two.md");
}

// --- Failures ---

#[test]
fn all_failed_exits_non_zero() {
    let tmp = TempDir::new().unwrap();
    let short = write_file(tmp.path(), "short.txt", "too short");

    cvscan()
        .args([short.as_str(), "/nonexistent/resume.txt"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""status":"failed""#))
        .stdout(predicate::str::contains(r#""file":"resume.txt""#))
        .stderr(predicate::str::contains("no input could be processed"));
}

// --- Options ---

#[test]
fn pretty_output() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "cv.txt", RESUME);

    cvscan()
        .args(["--pretty", file.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n    \"status\": \"success\""));
}

#[test]
fn config_file_overrides_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = write_file(tmp.path(), "cvscan.json", r#"{"min_text_len": 5}"#);
    let file = write_file(tmp.path(), "short.txt", "Jane Doe");

    let output = cvscan().args(["--config", config.as_str(), file.as_str()]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(reports(&output.stdout)[0]["data"]["name"], "Jane Doe");
}

#[test]
fn invalid_config_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let config = write_file(tmp.path(), "cvscan.json", r#"{"header_lines": 0}"#);
    let file = write_file(tmp.path(), "cv.txt", RESUME);

    cvscan()
        .args(["--config", config.as_str(), file.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading config"));
}

#[test]
fn no_ner_disables_recognizer() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(
        tmp.path(),
        "cv.txt",
        "JOHN DOE SOFTWARE ENGINEER AT INFOSYS BANGALORE\nSummary of work across payments teams",
    );

    let output = cvscan().arg(&file).output().unwrap();
    assert_eq!(reports(&output.stdout)[0]["data"]["name"], "John Doe");

    let output = cvscan().args(["--no-ner", file.as_str()]).output().unwrap();
    assert!(reports(&output.stdout)[0]["data"]["name"].is_null());
}
