use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const NOTE: &str = r#"{
    "version": 5,
    "schema_version": 1,
    "doc": { "type": "doc", "content": [
        { "type": "paragraph", "content": [ { "type": "text", "text": "hello" } ] },
        { "type": "horizontal_rule" }
    ] }
}"#;

fn boxnote(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("boxnote").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn converts_next_to_input() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("meeting.boxnote"), NOTE).unwrap();

    boxnote(&dir)
        .arg("meeting.boxnote")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created meeting.html"))
        .stderr(predicate::str::contains("unsupported node"));

    let html = fs::read_to_string(dir.path().join("meeting.html")).unwrap();
    assert_eq!(
        html,
        "<p>\nhello<p/>\n<pre>\n{\"type\": \"horizontal_rule\"}\n</pre>\n"
    );
}

#[test]
fn no_inputs_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    boxnote(&dir).assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn missing_doc_fails_without_output() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("bad.boxnote"),
        r#"{"version":1,"schema_version":1}"#,
    )
    .unwrap();
    fs::write(dir.path().join("good.boxnote"), NOTE).unwrap();

    boxnote(&dir)
        .args(["bad.boxnote", "good.boxnote"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.boxnote"))
        .stderr(predicate::str::contains("missing field `doc`"))
        .stderr(predicate::str::contains("1 of 2 notes failed: bad.boxnote"));

    assert!(!dir.path().join("bad.html").exists());
    assert!(dir.path().join("good.html").exists());
}

#[test]
fn extension_and_output_dir_flags() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("out")).unwrap();
    fs::write(dir.path().join("n.boxnote"), NOTE).unwrap();

    boxnote(&dir)
        .args(["-e", "xhtml", "-o", "out", "n.boxnote"])
        .assert()
        .success();

    assert!(dir.path().join("out/n.xhtml").exists());
}

#[test]
fn config_file_sets_extension() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("boxnote.toml"), "[output]\nextension = \"htm\"\n").unwrap();
    fs::write(dir.path().join("n.boxnote"), NOTE).unwrap();

    boxnote(&dir)
        .args(["--quiet", "n.boxnote"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert!(dir.path().join("n.htm").exists());
}
