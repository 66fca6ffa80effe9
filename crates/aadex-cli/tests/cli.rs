//! Integration tests for the aadex binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const FRONT: &str = "RAHUL SHARMA\nDOB: 15/08/1995\nMale\n4521 8765 3321\n";
const BACK: &str = "Address: S/O Mohan Sharma, Malappuram, Kerala - 676505\n";

fn write_card(dir: &std::path::Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let front = dir.join("card.front.txt");
    let back = dir.join("card.back.txt");
    fs::write(&front, FRONT).unwrap();
    fs::write(&back, BACK).unwrap();
    (front, back)
}

#[test]
fn test_process_outputs_labeled_fields() {
    let dir = tempfile::tempdir().unwrap();
    let (front, back) = write_card(dir.path());

    Command::cargo_bin("aadex")
        .unwrap()
        .arg("process")
        .arg("--front")
        .arg(&front)
        .arg("--back")
        .arg(&back)
        .assert()
        .success()
        .stdout(predicate::str::contains("Id Number: 4521 8765 3321"))
        .stdout(predicate::str::contains("Name: RAHUL SHARMA"))
        .stdout(predicate::str::contains("Date Of Birth: 15/08/1995"))
        .stdout(predicate::str::contains("Postal Code: 676505"));
}

#[test]
fn test_process_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let (front, back) = write_card(dir.path());

    Command::cargo_bin("aadex")
        .unwrap()
        .args(["process", "--format", "json", "--front"])
        .arg(&front)
        .arg("--back")
        .arg(&back)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""idNumber": "4521 8765 3321""#))
        .stdout(predicate::str::contains(r#""gender": "Male""#));
}

#[test]
fn test_process_rejects_non_aadhaar_text() {
    let dir = tempfile::tempdir().unwrap();
    let front = dir.path().join("front.txt");
    let back = dir.path().join("back.txt");
    fs::write(&front, "random receipt text\n").unwrap();
    fs::write(&back, "totally unrelated\n").unwrap();

    Command::cargo_bin("aadex")
        .unwrap()
        .arg("process")
        .arg("--front")
        .arg(&front)
        .arg("--back")
        .arg(&back)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid Aadhaar card"));
}

#[test]
fn test_process_missing_input_fails() {
    Command::cargo_bin("aadex")
        .unwrap()
        .args(["process", "--front", "missing.txt", "--back", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_batch_writes_outputs_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    write_card(dir.path());
    let out_dir = dir.path().join("out");

    Command::cargo_bin("aadex")
        .unwrap()
        .arg("batch")
        .arg(dir.path().join("*.front.txt").to_str().unwrap())
        .arg("--output-dir")
        .arg(&out_dir)
        .arg("--summary")
        .assert()
        .success();

    let card_output = fs::read_to_string(out_dir.join("card.txt")).unwrap();
    assert!(card_output.contains("Id Number: 4521 8765 3321"));

    let summary = fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    assert!(summary.contains("ok"));
    assert!(summary.contains("4521 8765 3321"));
}

#[test]
fn test_config_show_prints_defaults() {
    Command::cargo_bin("aadex")
        .unwrap()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("document_keywords"));
}
