// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSONL row input and cell lookup.
//!
//! Rows are JSON objects, one per line. Column ids double as cell lookup
//! paths: a dot-separated id reaches into nested objects.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// One table row: a JSON object keyed by field name.
pub type Row = Map<String, Value>;

/// Reads all rows from a JSONL file.
///
/// Skips blank lines. Every non-blank line must parse as a JSON object;
/// errors carry the offending line number.
pub fn read_rows(path: &Path) -> Result<Vec<Row>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut rows = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(&line).map_err(|e| {
            Error::InvalidInput(format!("line {}: invalid JSON: {e}", idx + 1))
        })?;
        match value {
            Value::Object(row) => rows.push(row),
            _ => {
                return Err(Error::InvalidInput(format!(
                    "line {}: expected a JSON object",
                    idx + 1
                )));
            }
        }
    }

    Ok(rows)
}

/// Resolves a dot-separated column id against a row.
///
/// Returns `None` if any path segment is missing or crosses a non-object.
pub fn resolve_path<'a>(row: &'a Row, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = row.get(segments.next()?)?;
    for segment in segments {
        current = current.get(segment)?;
    }
    Some(current)
}

#[cfg(test)]
#[path = "rows_tests.rs"]
mod tests;
