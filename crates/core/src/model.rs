// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The filter model: one value per filtered column.
//!
//! A [`FilterModel`] is tagged by column data type and pairs an operator
//! from that type's registry with the stored comparison values. An absent
//! filter is represented as `Option<FilterModel>` (or a missing map entry)
//! at every API boundary, never as an in-band sentinel.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::column::ColumnDataType;
use crate::error::{Error, Result};
use crate::operators::{
    DateOperator, MultiOptionOperator, NumberOperator, Operator, OptionOperator, TextOperator,
};

/// Filter state for a single column.
///
/// Value shapes per variant:
/// - `Text`: at most one string (none only for presence checks).
/// - `Number`: one value, or two sorted ascending; the upper bound may be
///   `f64::INFINITY` for capped or open-ended ranges.
/// - `Date`: zero, one (point), or two (range) days.
/// - `Option`: the selected option values, unique, in selection order.
/// - `MultiOption`: exactly one inner sequence holding the selected set.
///   The outer wrapping leaves room for comparisons against several sets
///   without changing the serialized shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterModel {
    Text {
        operator: TextOperator,
        values: Vec<String>,
    },
    Number {
        operator: NumberOperator,
        values: Vec<f64>,
    },
    Date {
        operator: DateOperator,
        values: Vec<NaiveDate>,
    },
    Option {
        operator: OptionOperator,
        values: Vec<String>,
    },
    MultiOption {
        operator: MultiOptionOperator,
        values: Vec<Vec<String>>,
    },
}

impl FilterModel {
    /// Returns the column data type this model filters.
    pub fn data_type(&self) -> ColumnDataType {
        match self {
            FilterModel::Text { .. } => ColumnDataType::Text,
            FilterModel::Number { .. } => ColumnDataType::Number,
            FilterModel::Date { .. } => ColumnDataType::Date,
            FilterModel::Option { .. } => ColumnDataType::Option,
            FilterModel::MultiOption { .. } => ColumnDataType::MultiOption,
        }
    }

    /// Returns the operator's string key.
    pub fn operator_key(&self) -> &'static str {
        match self {
            FilterModel::Text { operator, .. } => operator.as_str(),
            FilterModel::Number { operator, .. } => operator.as_str(),
            FilterModel::Date { operator, .. } => operator.as_str(),
            FilterModel::Option { operator, .. } => operator.as_str(),
            FilterModel::MultiOption { operator, .. } => operator.as_str(),
        }
    }

    /// Returns the operator's human-readable label.
    pub fn operator_label(&self) -> &'static str {
        match self {
            FilterModel::Text { operator, .. } => operator.label(),
            FilterModel::Number { operator, .. } => operator.label(),
            FilterModel::Date { operator, .. } => operator.label(),
            FilterModel::Option { operator, .. } => operator.label(),
            FilterModel::MultiOption { operator, .. } => operator.label(),
        }
    }

    /// Validates that the stored value count matches what the operator
    /// accepts.
    ///
    /// The multi-option variant must additionally hold exactly one inner
    /// sequence.
    pub fn check_shape(&self) -> Result<()> {
        match self {
            FilterModel::Text { operator, values } => {
                check(operator, values.len())
            }
            FilterModel::Number { operator, values } => {
                check(operator, values.len())
            }
            FilterModel::Date { operator, values } => {
                check(operator, values.len())
            }
            FilterModel::Option { operator, values } => {
                check(operator, values.len())
            }
            FilterModel::MultiOption { operator, values } => {
                if values.len() != 1 {
                    return Err(Error::InvalidShape {
                        operator: operator.as_str(),
                        expected: "one inner sequence of",
                        got: values.len(),
                    });
                }
                check(operator, values[0].len())
            }
        }
    }

    /// Returns the selected set of a multi-option model.
    ///
    /// Empty when the model is not multi-option or the wrapper is empty.
    pub fn selected_set(&self) -> &[String] {
        match self {
            FilterModel::MultiOption { values, .. } => {
                values.first().map(Vec::as_slice).unwrap_or(&[])
            }
            _ => &[],
        }
    }
}

fn check<O: Operator>(operator: &O, count: usize) -> Result<()> {
    let shape = operator.values_shape();
    if shape.accepts(count) {
        Ok(())
    } else {
        Err(Error::InvalidShape {
            operator: operator.as_str(),
            expected: shape.describe(),
            got: count,
        })
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
