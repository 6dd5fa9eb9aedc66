// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for clause and data errors: every failure exits 1 with a
//! message on stderr, and hints name the valid alternatives.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use yare::parameterized;

fn sift() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("sift").unwrap()
}

const SCHEMA: &str = r#"
[[columns]]
id = "title"
type = "text"

[[columns]]
id = "status"
type = "option"
options = ["todo", "done"]

[[columns]]
id = "score"
type = "number"
"#;

struct Project {
    _temp: TempDir,
    schema: PathBuf,
    data: PathBuf,
}

fn project() -> Project {
    let temp = TempDir::new().unwrap();
    let schema = temp.path().join("columns.toml");
    let data = temp.path().join("rows.jsonl");
    fs::write(&schema, SCHEMA).unwrap();
    fs::write(&data, "{\"title\": \"One\", \"status\": \"todo\", \"score\": 1}\n").unwrap();
    Project {
        _temp: temp,
        schema,
        data,
    }
}

fn rows_where(project: &Project, clause: &str) -> Command {
    let mut cmd = sift();
    cmd.arg("rows")
        .arg("--schema")
        .arg(&project.schema)
        .arg("--where")
        .arg(clause)
        .arg(&project.data);
    cmd
}

#[parameterized(
    unknown_column = { "ghost = 1", "unknown column 'ghost'" },
    doubled_symbol = { "score == 1", "unknown operator '=='" },
    missing_operator = { "score", "missing operator" },
    missing_value = { "score >", "missing value" },
    bad_number = { "score > many", "invalid number: 'many'" },
    unknown_word_op = { "status glob todo", "unknown operator 'glob'" },
    symbol_on_option = { "status < todo", "does not apply to option columns" },
)]
fn clause_errors_exit_one_with_message(clause: &str, message: &str) {
    let p = project();
    rows_where(&p, clause)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains(message));
}

#[test]
fn unknown_column_hint_lists_schema_columns() {
    let p = project();
    rows_where(&p, "ghost = 1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("hint:"))
        .stderr(predicate::str::contains("title, status, score"));
}

#[test]
fn unknown_operator_hint_lists_registry_keys() {
    let p = project();
    rows_where(&p, "status glob todo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is, is_not, is_any_of, is_none_of"));
}

#[test]
fn malformed_jsonl_reports_the_line() {
    let temp = TempDir::new().unwrap();
    let schema = temp.path().join("columns.toml");
    let data = temp.path().join("rows.jsonl");
    fs::write(&schema, SCHEMA).unwrap();
    fs::write(&data, "{\"title\": \"ok\"}\n{broken\n").unwrap();

    sift()
        .arg("rows")
        .arg("--schema")
        .arg(&schema)
        .arg(&data)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn non_object_jsonl_line_is_rejected() {
    let temp = TempDir::new().unwrap();
    let schema = temp.path().join("columns.toml");
    let data = temp.path().join("rows.jsonl");
    fs::write(&schema, SCHEMA).unwrap();
    fs::write(&data, "[1, 2, 3]\n").unwrap();

    sift()
        .arg("rows")
        .arg("--schema")
        .arg(&schema)
        .arg(&data)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a JSON object"));
}

#[test]
fn missing_data_file_fails() {
    let temp = TempDir::new().unwrap();
    let schema = temp.path().join("columns.toml");
    fs::write(&schema, SCHEMA).unwrap();

    sift()
        .arg("rows")
        .arg("--schema")
        .arg(&schema)
        .arg(temp.path().join("absent.jsonl"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn help_and_version_work() {
    sift()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
    sift()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sift"));
}
