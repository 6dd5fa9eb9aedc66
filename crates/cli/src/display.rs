// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text rendering for command output.

use serde_json::Value;

use sift_core::rows::{resolve_path, Row};
use sift_core::{ColumnMeta, Operator, OperatorDetails, ValuesShape};

/// Format a single row for list output.
///
/// One line per row, schema columns in declaration order:
///
/// ```text
/// title="Fix the flaky build"  status=todo  score=10
/// ```
pub fn format_row_line(schema: &[ColumnMeta], row: &Row) -> String {
    schema
        .iter()
        .map(|column| {
            let cell = resolve_path(row, &column.id);
            format!("{}={}", column.id, format_cell(cell))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Format a cell value compactly: strings quoted, scalars bare, missing
/// cells as `-`.
pub fn format_cell(cell: Option<&Value>) -> String {
    match cell {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) => format!("\"{s}\""),
        Some(other) => other.to_string(),
    }
}

/// Format one operator line for `sift columns` output.
pub fn format_operator_line(details: &OperatorDetails, shape: &'static str) -> String {
    format!("    {:<20} {}  ({shape})", details.key, details.label)
}

/// Describe an operator's accepted value count for display.
pub fn shape_word<O: Operator>(op: &O) -> &'static str {
    match op.values_shape() {
        ValuesShape::None => "no value",
        ValuesShape::One => "1 value",
        ValuesShape::Two => "2 values",
        ValuesShape::Many => "values",
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
