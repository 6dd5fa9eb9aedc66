// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for filtering behavior across `sift rows` and `sift explain`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sift() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("sift").unwrap()
}

const SCHEMA: &str = r#"
[[columns]]
id = "title"
label = "Title"
type = "text"

[[columns]]
id = "status"
label = "Status"
type = "option"
options = [
  { value = "todo", label = "Todo" },
  { value = "in_progress", label = "In progress" },
  { value = "blocked", label = "Blocked" },
  { value = "closed", label = "Closed" },
  { value = "archived", label = "Archived" },
]

[[columns]]
id = "score"
label = "Score"
type = "number"
max = 100

[[columns]]
id = "due"
label = "Due"
type = "date"

[[columns]]
id = "tags"
label = "Tags"
type = "multi_option"
"#;

const DATA: &str = r#"{"title": "Fix flaky build", "status": "todo", "score": 10, "due": "2026-01-10", "tags": ["ci", "rust"]}
{"title": "Write release notes", "status": "in_progress", "score": 40, "due": "2026-02-05", "tags": ["docs"]}
{"title": "Upgrade toolchain", "status": "blocked", "score": 150, "due": "2026-03-01", "tags": ["rust"]}
{"title": "Archive old issues", "status": "closed", "score": 70, "due": "2026-01-20", "tags": []}
{"title": "Spring cleaning", "status": "archived", "score": 5, "due": "2026-04-01", "tags": ["chore", "rust"]}
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
    fs::write(&data, DATA).unwrap();
    Project {
        _temp: temp,
        schema,
        data,
    }
}

fn rows_cmd(project: &Project, clauses: &[&str]) -> Command {
    let mut cmd = sift();
    cmd.arg("rows").arg("--schema").arg(&project.schema);
    for clause in clauses {
        cmd.arg("--where").arg(clause);
    }
    cmd.arg(&project.data);
    cmd
}

fn explain_cmd(schema: &Path, clauses: &[&str]) -> Command {
    let mut cmd = sift();
    cmd.arg("explain").arg("--schema").arg(schema);
    for clause in clauses {
        cmd.arg("--where").arg(clause);
    }
    cmd
}

#[test]
fn no_clauses_prints_all_rows() {
    let p = project();
    rows_cmd(&p, &[])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fix flaky build"))
        .stdout(predicate::str::contains("Spring cleaning"));
}

#[test]
fn option_filter_selects_matching_rows_only() {
    let p = project();
    rows_cmd(&p, &["status = in_progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Write release notes"))
        .stdout(predicate::str::contains("Fix flaky build").not())
        .stdout(predicate::str::contains("Upgrade toolchain").not());
}

#[test]
fn option_list_upgrades_to_any_of() {
    let p = project();
    rows_cmd(&p, &["status = todo,in_progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fix flaky build"))
        .stdout(predicate::str::contains("Write release notes"))
        .stdout(predicate::str::contains("Upgrade toolchain").not());
}

#[test]
fn number_range_honors_the_cap_sentinel() {
    // 150 snaps to unbounded-above, so the 150-score row matches too.
    let p = project();
    rows_cmd(&p, &["score between 40..150"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Write release notes"))
        .stdout(predicate::str::contains("Upgrade toolchain"))
        .stdout(predicate::str::contains("Archive old issues"))
        .stdout(predicate::str::contains("Fix flaky build").not());
}

#[test]
fn date_filters_compare_days() {
    let p = project();
    rows_cmd(&p, &["due before 2026-02-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fix flaky build"))
        .stdout(predicate::str::contains("Archive old issues"))
        .stdout(predicate::str::contains("Write release notes").not());
}

#[test]
fn text_contains_folds_case() {
    let p = project();
    rows_cmd(&p, &["title contains FLAKY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fix flaky build"));
}

#[test]
fn multi_option_include_matches_set_cells() {
    let p = project();
    rows_cmd(&p, &["tags include rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fix flaky build"))
        .stdout(predicate::str::contains("Upgrade toolchain"))
        .stdout(predicate::str::contains("Spring cleaning"))
        .stdout(predicate::str::contains("Write release notes").not());
}

#[test]
fn multi_option_exclude_passes_rows_without_the_value() {
    let p = project();
    rows_cmd(&p, &["tags exclude rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Write release notes"))
        .stdout(predicate::str::contains("Archive old issues"))
        .stdout(predicate::str::contains("Fix flaky build").not());
}

#[test]
fn clauses_combine_conjunctively() {
    let p = project();
    rows_cmd(&p, &["tags include rust", "score < 100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fix flaky build"))
        .stdout(predicate::str::contains("Spring cleaning"))
        .stdout(predicate::str::contains("Upgrade toolchain").not());
}

#[test]
fn count_flag_prints_the_total_only() {
    let p = project();
    rows_cmd(&p, &["status = todo,in_progress"])
        .arg("--count")
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn zero_matches_still_exits_zero() {
    let p = project();
    rows_cmd(&p, &["score > 9000"])
        .arg("--count")
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn limit_caps_printed_rows() {
    let p = project();
    let output = rows_cmd(&p, &[]).arg("--limit").arg("2").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn json_output_is_parseable_jsonl() {
    let p = project();
    let output = rows_cmd(&p, &["status = todo"])
        .arg("--output")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let row: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(row["title"], "Fix flaky build");
}

#[test]
fn explain_summarizes_active_filters() {
    let p = project();
    explain_cmd(&p.schema, &["status = todo,in_progress", "score between 10..150"])
        .assert()
        .success()
        .stdout(predicate::str::contains("active filters:"))
        .stdout(predicate::str::contains("Status is any of Todo, In progress"))
        .stdout(predicate::str::contains("Score is between 10 and 100+"));
}

#[test]
fn explain_without_clauses_reports_none() {
    let p = project();
    explain_cmd(&p.schema, &[])
        .assert()
        .success()
        .stdout(predicate::str::contains("no active filters"));
}

#[test]
fn end_to_end_status_scenario_matches_only_selected_rows() {
    // Interactive flow: todo selected, in_progress added, todo removed
    // again leaves `status is in_progress`; the CLI spelling of that
    // final state selects exactly the in-progress rows.
    let p = project();
    rows_cmd(&p, &["status = in_progress"])
        .arg("--output")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\":\"in_progress\""))
        .stdout(predicate::str::contains("\"status\":\"todo\"").not())
        .stdout(predicate::str::contains("\"status\":\"blocked\"").not());
}
