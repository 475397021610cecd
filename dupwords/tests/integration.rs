use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_dupwords")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn scan(input: &str) -> String {
    let mut infile = NamedTempFile::new().unwrap();
    infile.write_all(input.as_bytes()).unwrap();

    let assert = cmd().arg(infile.path()).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn cli_reports_space_duplicate_with_context() {
    let output = scan("the the cat sat");
    assert!(output.contains("Found duplicate: 'the the' at 0"), "Got: {output}");
    assert!(output.contains("Context: ...the the cat sat..."), "Got: {output}");
    assert!(output.contains("1 space duplicate(s), 0 slash duplicate(s)"), "Got: {output}");
}

#[test]
fn cli_reports_slash_duplicate_in_its_own_section() {
    let output = scan("risk / risk assessment");
    let slash = output.find("--- Slash duplicates ---").unwrap();
    assert!(output[slash..].contains("'risk / risk' at 0"), "Got: {output}");
    assert!(output.contains("0 space duplicate(s), 1 slash duplicate(s)"), "Got: {output}");
}

#[test]
fn cli_mixed_script_fixture() {
    let assert = cmd().arg(fixture_path("page.html")).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let slash = output.find("--- Slash duplicates ---").unwrap();
    let (space_section, slash_section) = output.split_at(slash);

    assert!(space_section.contains("'факты факты'"), "Got: {output}");
    assert!(space_section.contains("'the the'"), "Got: {output}");
    assert!(slash_section.contains("'source / source'"), "Got: {output}");
    assert!(slash_section.contains("'Агент / агент'"), "Got: {output}");
    assert!(space_section.find("факты").unwrap() < space_section.find("the the").unwrap());
}

#[test]
fn cli_output_is_stable_across_runs() {
    let first = cmd().arg(fixture_path("page.html")).assert().success();
    let second = cmd().arg(fixture_path("page.html")).assert().success();
    assert_eq!(first.get_output().stdout, second.get_output().stdout);
}

#[test]
fn cli_context_width() {
    let mut infile = NamedTempFile::new().unwrap();
    infile.write_all(b"0123456789 word word abcdefghij").unwrap();

    cmd()
        .arg(infile.path())
        .args(["-c", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Context: ...9 word word a..."));
}

#[test]
fn cli_strict_fails_on_findings() {
    let mut infile = NamedTempFile::new().unwrap();
    infile.write_all(b"it is is broken").unwrap();

    cmd()
        .arg(infile.path())
        .arg("--strict")
        .assert()
        .failure()
        .stdout(predicate::str::contains("'is is'"))
        .stderr(predicate::str::contains("1 duplicate(s) found"));
}

#[test]
fn cli_strict_passes_on_clean_text() {
    let mut infile = NamedTempFile::new().unwrap();
    infile.write_all(b"all words differ").unwrap();

    cmd().arg(infile.path()).arg("--strict").assert().success();
}

#[test]
fn cli_missing_input() {
    cmd()
        .arg("/tmp/nonexistent_dupwords_test_xyz.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
