// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `sift columns` command: describe the schema's columns.

use std::path::Path;

use serde_json::Value;

use sift_core::options::count_options;
use sift_core::rows::{read_rows, resolve_path, Row};
use sift_core::{ColumnDataType, ColumnMeta, Operator};
use sift_core::{DateOperator, MultiOptionOperator, NumberOperator, OptionOperator, TextOperator};

use crate::display::{format_operator_line, shape_word};
use crate::error::Result;
use crate::schema::TableSchema;

/// Lists columns, their operators in registry order, and (with data)
/// their derived options with whole-dataset counts.
pub fn run(schema_path: &Path, counts_path: Option<&Path>) -> Result<Vec<String>> {
    let schema = TableSchema::load(schema_path)?;
    let rows = counts_path.map(read_rows).transpose()?;

    let mut lines = Vec::new();
    for column in &schema.columns {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!(
            "{} [{}] ({})",
            column.display_name, column.id, column.data_type
        ));

        lines.push("  operators:".to_string());
        lines.extend(operator_lines(column.data_type));

        append_option_lines(&mut lines, column, rows.as_deref())?;
    }
    Ok(lines)
}

fn operator_lines(data_type: ColumnDataType) -> Vec<String> {
    match data_type {
        ColumnDataType::Text => registry_lines(TextOperator::ALL),
        ColumnDataType::Number => registry_lines(NumberOperator::ALL),
        ColumnDataType::Date => registry_lines(DateOperator::ALL),
        ColumnDataType::Option => registry_lines(OptionOperator::ALL),
        ColumnDataType::MultiOption => registry_lines(MultiOptionOperator::ALL),
    }
}

fn registry_lines<O: Operator>(all: &[O]) -> Vec<String> {
    all.iter()
        .map(|op| format_operator_line(&op.details(), shape_word(op)))
        .collect()
}

fn append_option_lines(
    lines: &mut Vec<String>,
    column: &ColumnMeta,
    rows: Option<&[Row]>,
) -> Result<()> {
    if !matches!(
        column.data_type,
        ColumnDataType::Option | ColumnDataType::MultiOption
    ) {
        return Ok(());
    }

    match rows {
        Some(rows) => {
            let cells: Vec<&Value> = rows
                .iter()
                .filter_map(|row| resolve_path(row, &column.id))
                .collect();
            let tallied = count_options(column, &cells)?;
            if tallied.is_empty() {
                return Ok(());
            }
            lines.push("  options:".to_string());
            for (option, count) in tallied {
                lines.push(format!("    {:<20} {}  {count}", option.value, option.label));
            }
        }
        None => {
            if let Some(options) = &column.options {
                lines.push("  options:".to_string());
                for option in options {
                    lines.push(format!("    {:<20} {}", option.value, option.label));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "columns_tests.rs"]
mod tests;
