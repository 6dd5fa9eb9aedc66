// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `sift explain` command: show the filter state clauses produce.

use std::path::Path;

use sift_core::FilterState;

use crate::error::Result;
use crate::query::apply_clauses;
use crate::schema::TableSchema;

/// Renders the active-filter summary and the serialized filter state.
pub fn run(schema_path: &Path, clauses: &[String]) -> Result<Vec<String>> {
    let schema = TableSchema::load(schema_path)?;

    let mut state = FilterState::new();
    apply_clauses(&mut state, &schema, clauses)?;

    if state.is_empty() {
        return Ok(vec!["no active filters".to_string()]);
    }

    let mut lines = vec!["active filters:".to_string()];
    for line in state.summary(&schema.columns) {
        lines.push(format!("  {line}"));
    }

    lines.push(String::new());
    let json = serde_json::to_string_pretty(&state)?;
    lines.extend(json.lines().map(str::to_string));

    Ok(lines)
}

#[cfg(test)]
#[path = "explain_tests.rs"]
mod tests;
