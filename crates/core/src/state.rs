// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter state for a whole table.
//!
//! One [`FilterModel`] per filtered column, keyed by column id. A column
//! without an entry imposes no constraint. State transitions are
//! synchronous and single-writer: each mutation reads the current entry,
//! applies the matching pure function from [`crate::update`], and stores
//! or removes the result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bound::format_bound;
use crate::column::ColumnMeta;
use crate::error::Result;
use crate::model::FilterModel;
use crate::operators::TextOperator;
use crate::rows::{resolve_path, Row};
use crate::update::{self, DateRange, NumberFilterKind};

/// All active column filters of a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState {
    filters: BTreeMap<String, FilterModel>,
}

impl FilterState {
    /// Creates an empty filter state (every column unconstrained).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of filtered columns.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns true if no column is filtered.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns the filter for a column, if any.
    pub fn get(&self, column_id: &str) -> Option<&FilterModel> {
        self.filters.get(column_id)
    }

    /// Iterates over `(column id, filter)` pairs in column-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FilterModel)> {
        self.filters.iter()
    }

    /// Stores a filter for a column after validating its shape.
    pub fn set(&mut self, column_id: impl Into<String>, model: FilterModel) -> Result<()> {
        model.check_shape()?;
        self.filters.insert(column_id.into(), model);
        Ok(())
    }

    /// Removes the filter for a column.
    pub fn clear(&mut self, column_id: &str) -> Option<FilterModel> {
        self.filters.remove(column_id)
    }

    /// Removes all filters.
    pub fn clear_all(&mut self) {
        self.filters.clear();
    }

    /// Replaces a text column's filter value.
    pub fn set_text(&mut self, column: &ColumnMeta, input: &str) {
        let next = update::set_text(self.filters.get(&column.id), input);
        self.store(&column.id, next);
    }

    /// Sets a text presence check on a column.
    pub fn set_text_presence(&mut self, column: &ColumnMeta, operator: TextOperator) {
        let next = update::set_text_presence(operator);
        self.store(&column.id, next);
    }

    /// Replaces a number column's filter values.
    pub fn set_number(&mut self, column: &ColumnMeta, inputs: &[f64]) {
        let next = update::set_number(self.filters.get(&column.id), inputs, column.max);
        self.store(&column.id, next);
    }

    /// Switches a number column between single-value and range filtering.
    pub fn change_number_kind(&mut self, column: &ColumnMeta, kind: NumberFilterKind) {
        let next = update::change_number_kind(self.filters.get(&column.id), kind, column.max);
        self.store(&column.id, next);
    }

    /// Replaces a date column's selection.
    pub fn set_date(&mut self, column: &ColumnMeta, range: DateRange) {
        let next = update::set_date(self.filters.get(&column.id), range);
        self.store(&column.id, next);
    }

    /// Toggles one value of an option column.
    pub fn toggle_option(&mut self, column: &ColumnMeta, value: &str, selected: bool) {
        let next = update::toggle_option(self.filters.get(&column.id), value, selected);
        self.store(&column.id, next);
    }

    /// Toggles one value of a multi-option column.
    pub fn toggle_multi_option(&mut self, column: &ColumnMeta, value: &str, selected: bool) {
        let next = update::toggle_multi_option(self.filters.get(&column.id), value, selected);
        self.store(&column.id, next);
    }

    /// Returns true if a row passes every active filter.
    ///
    /// Cells are resolved by dot-path and run through the column's
    /// transform (when configured) before evaluation. A filter on a
    /// column missing from `schema` evaluates against the raw cell.
    pub fn matches_row(&self, schema: &[ColumnMeta], row: &Row) -> bool {
        self.filters.iter().all(|(column_id, model)| {
            let meta = schema.iter().find(|c| &c.id == column_id);
            let cell = resolve_path(row, column_id);
            let transformed = meta
                .and_then(|m| m.transform.as_ref())
                .and_then(|f| cell.map(|c| transform_cell(f, c)));
            model.matches(transformed.as_ref().or(cell))
        })
    }

    /// Renders one human-readable line per active filter.
    pub fn summary(&self, schema: &[ColumnMeta]) -> Vec<String> {
        self.filters
            .iter()
            .map(|(column_id, model)| {
                let meta = schema.iter().find(|c| &c.id == column_id);
                describe(column_id, model, meta)
            })
            .collect()
    }

    fn store(&mut self, column_id: &str, next: Option<FilterModel>) {
        match next {
            Some(model) => {
                self.filters.insert(column_id.to_string(), model);
            }
            None => {
                self.filters.remove(column_id);
            }
        }
    }
}

/// Rewrites a cell through the column transform so the predicate sees
/// canonical option values.
fn transform_cell(f: &crate::column::OptionTransform, cell: &Value) -> Value {
    let f = f.as_ref();
    match cell {
        Value::Array(items) => {
            Value::Array(items.iter().map(|v| Value::String(f(v).value)).collect())
        }
        other => Value::String(f(other).value),
    }
}

fn describe(column_id: &str, model: &FilterModel, meta: Option<&ColumnMeta>) -> String {
    let name = meta.map(|m| m.display_name.as_str()).unwrap_or(column_id);
    let label = model.operator_label();
    let cap = meta.and_then(|m| m.max);

    let rendered = match model {
        FilterModel::Text { values, .. } => values
            .first()
            .map(|v| format!(" \"{v}\""))
            .unwrap_or_default(),
        FilterModel::Number { values, .. } => match values.as_slice() {
            [low, high] => format!(" {} and {}", format_bound(*low, cap), format_bound(*high, cap)),
            [single] => format!(" {}", format_bound(*single, cap)),
            _ => String::new(),
        },
        FilterModel::Date { values, .. } => match values.as_slice() {
            [start, end] => format!(" {start} and {end}"),
            [day] => format!(" {day}"),
            _ => String::new(),
        },
        FilterModel::Option { values, .. } => format!(" {}", option_labels(values, meta)),
        FilterModel::MultiOption { .. } => {
            format!(" {}", option_labels(model.selected_set(), meta))
        }
    };

    format!("{name} {label}{rendered}")
}

fn option_labels(values: &[String], meta: Option<&ColumnMeta>) -> String {
    values
        .iter()
        .map(|v| match meta {
            Some(m) => m.option_label(v).to_string(),
            None => v.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
