// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for schema loading and the `sift columns` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sift() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("sift").unwrap()
}

fn write_schema(temp: &TempDir, contents: &str) -> PathBuf {
    let path = temp.path().join("columns.toml");
    fs::write(&path, contents).unwrap();
    path
}

const SCHEMA: &str = r#"
[[columns]]
id = "status"
label = "Status"
type = "option"
options = [
  { value = "todo", label = "Todo" },
  { value = "done", label = "Done" },
]

[[columns]]
id = "score"
label = "Score"
type = "number"
max = 100
"#;

#[test]
fn columns_lists_operators_per_type() {
    let temp = TempDir::new().unwrap();
    let schema = write_schema(&temp, SCHEMA);

    sift()
        .arg("columns")
        .arg("--schema")
        .arg(&schema)
        .assert()
        .success()
        .stdout(predicate::str::contains("Status [status] (option)"))
        .stdout(predicate::str::contains("is_any_of"))
        .stdout(predicate::str::contains("Score [score] (number)"))
        .stdout(predicate::str::contains("is_between"))
        .stdout(predicate::str::contains("greater_than_or_equal"));
}

#[test]
fn columns_lists_static_options() {
    let temp = TempDir::new().unwrap();
    let schema = write_schema(&temp, SCHEMA);

    sift()
        .arg("columns")
        .arg("--schema")
        .arg(&schema)
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo"))
        .stdout(predicate::str::contains("Done"));
}

#[test]
fn columns_counts_options_from_data() {
    let temp = TempDir::new().unwrap();
    let schema = write_schema(&temp, SCHEMA);
    let data = temp.path().join("rows.jsonl");
    fs::write(
        &data,
        concat!(
            "{\"status\": \"todo\", \"score\": 1}\n",
            "{\"status\": \"todo\", \"score\": 2}\n",
            "{\"status\": \"done\", \"score\": 3}\n",
        ),
    )
    .unwrap();

    let output = sift()
        .arg("columns")
        .arg("--schema")
        .arg(&schema)
        .arg("--counts")
        .arg(&data)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let todo_line = stdout.lines().find(|l| l.contains("todo")).unwrap();
    assert!(todo_line.trim_end().ends_with('2'), "line: {todo_line}");
    let done_line = stdout.lines().find(|l| l.contains("done")).unwrap();
    assert!(done_line.trim_end().ends_with('1'), "line: {done_line}");
}

#[test]
fn duplicate_column_ids_fail_fast() {
    let temp = TempDir::new().unwrap();
    let schema = write_schema(
        &temp,
        "[[columns]]\nid = \"a\"\ntype = \"text\"\n\n[[columns]]\nid = \"a\"\ntype = \"number\"\n",
    );

    sift()
        .arg("columns")
        .arg("--schema")
        .arg(&schema)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("duplicate column id 'a'"));
}

#[test]
fn unknown_column_type_fails_with_hint() {
    let temp = TempDir::new().unwrap();
    let schema = write_schema(&temp, "[[columns]]\nid = \"a\"\ntype = \"decimal\"\n");

    sift()
        .arg("columns")
        .arg("--schema")
        .arg(&schema)
        .assert()
        .failure()
        .stderr(predicate::str::contains("'decimal'"))
        .stderr(predicate::str::contains("multi_option"));
}

#[test]
fn missing_schema_file_fails() {
    sift()
        .arg("columns")
        .arg("--schema")
        .arg("/nonexistent/columns.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
