// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `sift rows` command: filter JSONL rows.

use std::path::Path;

use sift_core::rows::read_rows;
use sift_core::FilterState;

use crate::cli::OutputFormat;
use crate::display::format_row_line;
use crate::error::Result;
use crate::query::apply_clauses;
use crate::schema::TableSchema;

/// Filters rows and returns the output lines.
pub fn run(
    schema_path: &Path,
    clauses: &[String],
    limit: Option<usize>,
    count: bool,
    output: OutputFormat,
    data_path: &Path,
) -> Result<Vec<String>> {
    let schema = TableSchema::load(schema_path)?;

    let mut state = FilterState::new();
    apply_clauses(&mut state, &schema, clauses)?;

    let rows = read_rows(data_path)?;
    let matching: Vec<_> = rows
        .iter()
        .filter(|row| state.matches_row(&schema.columns, row))
        .collect();

    if count {
        return Ok(vec![matching.len().to_string()]);
    }

    matching
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|row| match output {
            OutputFormat::Text => Ok(format_row_line(&schema.columns, row)),
            OutputFormat::Json => Ok(serde_json::to_string(row)?),
        })
        .collect()
}

#[cfg(test)]
#[path = "rows_tests.rs"]
mod tests;
