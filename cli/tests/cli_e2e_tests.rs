//! CLI end-to-end tests that run the binary over a copy of the shared
//! fixture ontologies in `tests/ontologies`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../tests/ontologies");

#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin("ttl2jsonld").expect("binary should exist")
}

fn copy_tree(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let dest = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_tree(&entry.path(), &dest);
        } else {
            fs::copy(entry.path(), &dest).unwrap();
        }
    }
}

/// Working directory containing `ontologies/` with every fixture.
fn fixture_workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    copy_tree(Path::new(FIXTURES_DIR), &dir.path().join("ontologies"));
    dir
}

// ── E2E: Convert all fixtures ───────────────────────────────────────────────

#[test]
fn test_cli_e2e_convert_all_fixtures() {
    let dir = fixture_workspace();
    let root = dir.path().join("ontologies");

    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("core.ttl"))
        .stdout(predicate::str::contains("agents.ttl"))
        .stdout(predicate::str::contains("Error converting"))
        .stdout(predicate::str::contains("unterminated.ttl"));

    for name in ["core", "agents/agents"] {
        let content = fs::read_to_string(root.join(format!("{name}.jsonld")))
            .unwrap_or_else(|e| panic!("Output file for {name} missing: {e}"));
        let _: serde_json::Value =
            serde_json::from_str(&content).expect("output should be valid JSON");
    }

    assert!(!root.join("invalid/unterminated.jsonld").exists());
    assert!(!root.join("README.jsonld").exists());
}

// ── E2E: Output keeps the ontology terms ────────────────────────────────────

#[test]
fn test_cli_e2e_output_mentions_terms() {
    let dir = fixture_workspace();

    cmd().current_dir(dir.path()).assert().success();

    let content = fs::read_to_string(dir.path().join("ontologies/core.jsonld")).unwrap();
    assert!(content.contains("Document"));
    assert!(content.contains("Dokument"));
    assert!(content.contains("1.2.0"));
}

// ── E2E: Idempotent re-run ──────────────────────────────────────────────────

#[test]
fn test_cli_e2e_rerun_is_idempotent() {
    let dir = fixture_workspace();
    let target = dir.path().join("ontologies/agents/agents.jsonld");

    cmd().current_dir(dir.path()).assert().success();
    let first = fs::read_to_string(&target).unwrap();

    cmd().current_dir(dir.path()).assert().success();
    let second = fs::read_to_string(&target).unwrap();

    assert_eq!(first, second);
}

// ── E2E: Summary over fixtures ──────────────────────────────────────────────

#[test]
fn test_cli_e2e_summary_counts() {
    let dir = fixture_workspace();

    let output = cmd()
        .current_dir(dir.path())
        .arg("--summary")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let json_start = stdout.find("\n{").expect("summary should be printed") + 1;
    let summary: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();

    assert_eq!(summary["converted"], serde_json::json!(2));
    assert_eq!(summary["failed"], serde_json::json!(1));
}
