// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deriving option sets from column metadata and raw cell values.
//!
//! Option and multi-option columns need a closed option set to filter
//! against. It comes from one of three sources, tried in order: static
//! options declared on the column, the column's transform function, or
//! inference from cells that are already option-shaped (plain strings or
//! `{value, label, icon?}` objects). A column with none of the three is
//! a configuration error and fails fast.
//!
//! Derivation runs over the full unfiltered value set so option counts
//! reflect the whole dataset, not the filtered view. Nothing here is
//! cached; callers memoize if they need to.

use serde_json::Value;

use crate::column::{ColumnMeta, ColumnOption};
use crate::error::{Error, Result};

/// Derives the option set for a column from all raw cell values.
///
/// Static options are returned as declared. Otherwise options are
/// collected from the cells (via the transform when configured),
/// deduplicated by value in first-seen order. Null cells are skipped.
///
/// # Errors
///
/// `OptionSourceMissing` when the column has no static options, no
/// transform, and a cell that cannot be read as an option.
pub fn derive_options(meta: &ColumnMeta, raw_values: &[&Value]) -> Result<Vec<ColumnOption>> {
    if let Some(options) = &meta.options {
        return Ok(options.clone());
    }

    let mut derived: Vec<ColumnOption> = Vec::new();
    for cell in raw_values {
        for option in cell_options(meta, cell)? {
            if !derived.iter().any(|o| o.value == option.value) {
                derived.push(option);
            }
        }
    }
    Ok(derived)
}

/// Derives the option set and tallies how many cells carry each option.
///
/// Counts cover the whole dataset. Declared options that no cell carries
/// are still listed with a count of zero; stray cell values outside a
/// declared static set are not added.
pub fn count_options(
    meta: &ColumnMeta,
    raw_values: &[&Value],
) -> Result<Vec<(ColumnOption, usize)>> {
    let options = derive_options(meta, raw_values)?;

    let mut counts = vec![0usize; options.len()];
    for cell in raw_values {
        let cell_values: Vec<String> = match cell_options(meta, cell) {
            Ok(cell_opts) => cell_opts.into_iter().map(|o| o.value).collect(),
            // Static options make inference unnecessary; a cell that
            // cannot be read just counts toward nothing.
            Err(_) if meta.options.is_some() => Vec::new(),
            Err(e) => return Err(e),
        };
        // A cell carrying the same value twice still counts once.
        let mut seen: Vec<String> = Vec::new();
        for value in cell_values {
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
        for value in seen {
            if let Some(idx) = options.iter().position(|o| o.value == value) {
                counts[idx] += 1;
            }
        }
    }

    Ok(options.into_iter().zip(counts).collect())
}

/// Reads the option(s) carried by one raw cell.
///
/// Multi-option cells (arrays) yield one option per element; null cells
/// yield none.
fn cell_options(meta: &ColumnMeta, cell: &Value) -> Result<Vec<ColumnOption>> {
    if let Some(transform) = &meta.transform {
        let transform = transform.as_ref();
        return Ok(match cell {
            Value::Null => Vec::new(),
            Value::Array(items) => items.iter().map(|v| transform(v)).collect(),
            other => vec![transform(other)],
        });
    }

    match cell {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .map(|v| infer_option(v).ok_or_else(|| missing_source(meta)))
            .collect(),
        other => Ok(vec![infer_option(other).ok_or_else(|| missing_source(meta))?]),
    }
}

/// Reads a single option-shaped value: a plain string, or an object with
/// string `value` and `label` fields and an optional `icon`.
fn infer_option(cell: &Value) -> Option<ColumnOption> {
    match cell {
        Value::String(s) => Some(ColumnOption::new(s.clone())),
        Value::Object(map) => {
            let value = map.get("value")?.as_str()?;
            let label = map.get("label")?.as_str()?;
            let mut option = ColumnOption::with_label(value, label);
            if let Some(icon) = map.get("icon").and_then(Value::as_str) {
                option = option.icon(icon);
            }
            Some(option)
        }
        _ => None,
    }
}

fn missing_source(meta: &ColumnMeta) -> Error {
    Error::OptionSourceMissing {
        column: meta.id.clone(),
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
