// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluation of filter models against row cells.
//!
//! Cells arrive as `serde_json::Value` references; a missing cell is
//! `None`. Missing or type-mismatched cells never match, with two
//! deliberate exceptions: text `is_empty` exists to select them, and
//! multi-option filters treat a missing cell as the empty set (so the
//! exclude family passes rows that lack the column entirely).

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

use crate::model::FilterModel;
use crate::operators::{DateOperator, MultiOptionOperator, NumberOperator, OptionOperator, TextOperator};

impl FilterModel {
    /// Returns true if a row whose cell holds `cell` passes this filter.
    pub fn matches(&self, cell: Option<&Value>) -> bool {
        match self {
            FilterModel::Text { operator, values } => {
                matches_text(*operator, values, cell)
            }
            FilterModel::Number { operator, values } => {
                matches_number(*operator, values, cell)
            }
            FilterModel::Date { operator, values } => {
                matches_date(*operator, values, cell)
            }
            FilterModel::Option { operator, values } => {
                matches_option(*operator, values, cell)
            }
            FilterModel::MultiOption { operator, values } => {
                let selected = values.first().map(Vec::as_slice).unwrap_or(&[]);
                matches_multi_option(*operator, selected, cell)
            }
        }
    }
}

fn matches_text(operator: TextOperator, values: &[String], cell: Option<&Value>) -> bool {
    let text = cell.and_then(scalar_text);
    let empty = text.as_deref().map_or(true, str::is_empty);

    match operator {
        TextOperator::IsEmpty => empty,
        TextOperator::IsNotEmpty => !empty,
        TextOperator::Contains
        | TextOperator::NotContains
        | TextOperator::Is
        | TextOperator::IsNot => {
            let (Some(text), Some(value)) = (text, values.first()) else {
                return false;
            };
            let hit = match operator {
                TextOperator::Contains | TextOperator::NotContains => {
                    text.to_lowercase().contains(&value.to_lowercase())
                }
                _ => text == *value,
            };
            match operator {
                TextOperator::Contains | TextOperator::Is => hit,
                _ => !hit,
            }
        }
    }
}

fn matches_number(operator: NumberOperator, values: &[f64], cell: Option<&Value>) -> bool {
    let Some(cell) = cell.and_then(Value::as_f64) else {
        return false;
    };

    match operator {
        NumberOperator::Is => values.first().is_some_and(|v| cell == *v),
        NumberOperator::IsNot => values.first().is_some_and(|v| cell != *v),
        NumberOperator::GreaterThan => values.first().is_some_and(|v| cell > *v),
        NumberOperator::GreaterThanOrEqual => values.first().is_some_and(|v| cell >= *v),
        NumberOperator::LessThan => values.first().is_some_and(|v| cell < *v),
        NumberOperator::LessThanOrEqual => values.first().is_some_and(|v| cell <= *v),
        NumberOperator::IsBetween => in_number_range(cell, values),
        NumberOperator::IsNotBetween => values.len() == 2 && !in_number_range(cell, values),
    }
}

fn in_number_range(cell: f64, values: &[f64]) -> bool {
    // The upper bound may be the infinity sentinel (unbounded above).
    matches!(values, [low, high] if cell >= *low && cell <= *high)
}

fn matches_date(operator: DateOperator, values: &[NaiveDate], cell: Option<&Value>) -> bool {
    let Some(cell) = cell.and_then(cell_date) else {
        return false;
    };

    match operator {
        DateOperator::Is => values.first().is_some_and(|d| cell == *d),
        DateOperator::IsNot => values.first().is_some_and(|d| cell != *d),
        DateOperator::IsBefore => values.first().is_some_and(|d| cell < *d),
        DateOperator::IsOnOrBefore => values.first().is_some_and(|d| cell <= *d),
        DateOperator::IsAfter => values.first().is_some_and(|d| cell > *d),
        DateOperator::IsOnOrAfter => values.first().is_some_and(|d| cell >= *d),
        DateOperator::IsBetween => in_date_range(cell, values),
        DateOperator::IsNotBetween => values.len() == 2 && !in_date_range(cell, values),
    }
}

fn in_date_range(cell: NaiveDate, values: &[NaiveDate]) -> bool {
    matches!(values, [start, end] if cell >= *start && cell <= *end)
}

fn matches_option(operator: OptionOperator, values: &[String], cell: Option<&Value>) -> bool {
    let Some(key) = cell.and_then(option_key) else {
        return false;
    };

    match operator {
        OptionOperator::Is => values.first().is_some_and(|v| key == *v),
        OptionOperator::IsNot => values.first().is_some_and(|v| key != *v),
        OptionOperator::IsAnyOf => values.iter().any(|v| key == *v),
        OptionOperator::IsNoneOf => !values.iter().any(|v| key == *v),
    }
}

fn matches_multi_option(
    operator: MultiOptionOperator,
    selected: &[String],
    cell: Option<&Value>,
) -> bool {
    let cell_set = cell.map(cell_option_set).unwrap_or_default();

    let contains = |v: &String| cell_set.iter().any(|c| c == v);
    match operator {
        MultiOptionOperator::Include => selected.first().is_some_and(contains),
        MultiOptionOperator::Exclude => selected.first().is_some_and(|v| !contains(v)),
        MultiOptionOperator::IncludeAnyOf => selected.iter().any(|v| contains(v)),
        MultiOptionOperator::IncludeAllOf => {
            !selected.is_empty() && selected.iter().all(|v| contains(v))
        }
        MultiOptionOperator::ExcludeIfAnyOf => !selected.iter().any(|v| contains(v)),
        MultiOptionOperator::ExcludeIfAllOf => {
            !(!selected.is_empty() && selected.iter().all(|v| contains(v)))
        }
    }
}

/// Extracts comparable text from a scalar cell.
///
/// Numbers and booleans are stringified so text filters degrade sanely
/// on loosely-typed data; arrays and objects do not compare as text.
fn scalar_text(cell: &Value) -> Option<String> {
    match cell {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Parses a date cell: `YYYY-MM-DD` or an RFC 3339 timestamp, compared
/// at day precision.
fn cell_date(cell: &Value) -> Option<NaiveDate> {
    let s = cell.as_str()?;
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

/// Extracts the option key of an option-shaped cell: a plain string, or
/// an object carrying a string `value` field.
fn option_key(cell: &Value) -> Option<String> {
    match cell {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map.get("value").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

/// Extracts the option-value set of a multi-option cell.
///
/// Arrays are mapped element-wise; a scalar option-shaped cell is
/// treated as a one-element set.
fn cell_option_set(cell: &Value) -> Vec<String> {
    match cell {
        Value::Array(items) => items.iter().filter_map(option_key).collect(),
        other => option_key(other).into_iter().collect(),
    }
}

#[cfg(test)]
#[path = "predicate_tests.rs"]
mod tests;
