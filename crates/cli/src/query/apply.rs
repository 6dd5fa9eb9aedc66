// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Application of parsed clauses onto filter state.
//!
//! Resolves each clause's operator against the column's registry and
//! routes it through the core transition functions. Select-style clauses
//! on option and multi-option columns feed the toggle path one value at
//! a time, so repeated clauses on the same column merge and the operator
//! upgrades (`is` to `is_any_of`, `include` to `include_any_of`) exactly
//! as interactive selection would.

use chrono::NaiveDate;

use sift_core::bound::snap_to_cap;
use sift_core::{
    ColumnDataType, ColumnMeta, DateOperator, FilterModel, FilterState, MultiOptionOperator,
    NumberOperator, Operator, OptionOperator, TextOperator, ValuesShape,
};

use crate::error::{Error, Result};
use crate::schema::TableSchema;

use super::expr::{Clause, ClauseOp};
use super::parser::parse_clause;

/// Parse and apply a sequence of clause strings.
pub fn apply_clauses(
    state: &mut FilterState,
    schema: &TableSchema,
    inputs: &[String],
) -> Result<()> {
    for input in inputs {
        let clause = parse_clause(input)?;
        apply_clause(state, schema, &clause)?;
    }
    Ok(())
}

/// Apply one parsed clause to the filter state.
pub fn apply_clause(state: &mut FilterState, schema: &TableSchema, clause: &Clause) -> Result<()> {
    let column = schema.column(&clause.column)?;
    match column.data_type {
        ColumnDataType::Text => apply_text(state, column, clause),
        ColumnDataType::Number => apply_number(state, column, clause),
        ColumnDataType::Date => apply_date(state, column, clause),
        ColumnDataType::Option => apply_option(state, column, clause),
        ColumnDataType::MultiOption => apply_multi_option(state, column, clause),
    }
}

fn apply_text(state: &mut FilterState, column: &ColumnMeta, clause: &Clause) -> Result<()> {
    let operator = match &clause.op {
        ClauseOp::Eq => TextOperator::Is,
        ClauseOp::Ne => TextOperator::IsNot,
        ClauseOp::Word(w) => w.parse()?,
        other => return Err(symbol_mismatch(other, column, TextOperator::VALID_KEYS)),
    };

    if operator.values_shape() == ValuesShape::None {
        if !clause.raw_value.is_empty() {
            return Err(Error::Clause(format!(
                "operator '{operator}' takes no value (got \"{}\")",
                clause.raw_value
            )));
        }
        state.set_text_presence(column, operator);
        return Ok(());
    }

    if clause.raw_value.is_empty() {
        return Err(missing_value(clause));
    }
    let model = FilterModel::Text {
        operator,
        values: vec![clause.raw_value.clone()],
    };
    state.set(&column.id, model)?;
    Ok(())
}

fn apply_number(state: &mut FilterState, column: &ColumnMeta, clause: &Clause) -> Result<()> {
    let operator = match &clause.op {
        ClauseOp::Eq => NumberOperator::Is,
        ClauseOp::Ne => NumberOperator::IsNot,
        ClauseOp::Lt => NumberOperator::LessThan,
        ClauseOp::Le => NumberOperator::LessThanOrEqual,
        ClauseOp::Gt => NumberOperator::GreaterThan,
        ClauseOp::Ge => NumberOperator::GreaterThanOrEqual,
        ClauseOp::Word(w) => w.parse()?,
    };

    if clause.values.is_empty() {
        return Err(missing_value(clause));
    }

    let values = match operator.values_shape() {
        ValuesShape::One => {
            if clause.values.len() != 1 {
                return Err(value_count(clause, "exactly one value"));
            }
            vec![parse_number(&clause.values[0])?]
        }
        _ => {
            // Range: a lone or open-ended bound is unbounded above.
            let low = parse_number(&clause.values[0])?;
            let high = match clause.values.get(1) {
                None => f64::INFINITY,
                Some(v) if v.is_empty() => f64::INFINITY,
                Some(v) => parse_number(v)?,
            };
            if clause.values.len() > 2 {
                return Err(value_count(clause, "at most two values"));
            }
            let (low, high) = if high < low { (high, low) } else { (low, high) };
            vec![low, snap_to_cap(high, column.max)]
        }
    };

    let model = FilterModel::Number { operator, values };
    state.set(&column.id, model)?;
    Ok(())
}

fn apply_date(state: &mut FilterState, column: &ColumnMeta, clause: &Clause) -> Result<()> {
    let operator = match &clause.op {
        ClauseOp::Eq => DateOperator::Is,
        ClauseOp::Ne => DateOperator::IsNot,
        ClauseOp::Lt => DateOperator::IsBefore,
        ClauseOp::Le => DateOperator::IsOnOrBefore,
        ClauseOp::Gt => DateOperator::IsAfter,
        ClauseOp::Ge => DateOperator::IsOnOrAfter,
        ClauseOp::Word(w) => w.parse()?,
    };

    let mut values: Vec<NaiveDate> = clause
        .values
        .iter()
        .filter(|v| !v.is_empty())
        .map(|v| parse_date(v))
        .collect::<Result<_>>()?;

    let expected = match operator.values_shape() {
        ValuesShape::One => 1,
        _ => 2,
    };
    if values.len() != expected {
        let need = if expected == 1 {
            "exactly one date"
        } else {
            "exactly two dates"
        };
        return Err(value_count(clause, need));
    }
    values.sort();

    let model = FilterModel::Date { operator, values };
    state.set(&column.id, model)?;
    Ok(())
}

fn apply_option(state: &mut FilterState, column: &ColumnMeta, clause: &Clause) -> Result<()> {
    let operator = match &clause.op {
        ClauseOp::Eq => OptionOperator::Is,
        ClauseOp::Ne => OptionOperator::IsNot,
        ClauseOp::Word(w) => w.parse()?,
        other => return Err(symbol_mismatch(other, column, OptionOperator::VALID_KEYS)),
    };

    if clause.values.is_empty() {
        return Err(missing_value(clause));
    }

    match operator {
        // Select path: toggling lets the filter upgrade from `is` to
        // `is_any_of` as values accumulate, also across repeated clauses.
        OptionOperator::Is | OptionOperator::IsAnyOf => {
            for value in &clause.values {
                state.toggle_option(column, value, true);
            }
        }
        OptionOperator::IsNot | OptionOperator::IsNoneOf => {
            let operator = if clause.values.len() > 1 {
                OptionOperator::IsNoneOf
            } else {
                operator
            };
            let model = FilterModel::Option {
                operator,
                values: clause.values.clone(),
            };
            state.set(&column.id, model)?;
        }
    }
    Ok(())
}

fn apply_multi_option(
    state: &mut FilterState,
    column: &ColumnMeta,
    clause: &Clause,
) -> Result<()> {
    let operator = match &clause.op {
        ClauseOp::Eq => MultiOptionOperator::Include,
        ClauseOp::Ne => MultiOptionOperator::Exclude,
        ClauseOp::Word(w) => w.parse()?,
        other => {
            return Err(symbol_mismatch(
                other,
                column,
                MultiOptionOperator::VALID_KEYS,
            ))
        }
    };

    if clause.values.is_empty() {
        return Err(missing_value(clause));
    }

    match operator {
        // Select path through the transition policy.
        MultiOptionOperator::Include | MultiOptionOperator::IncludeAnyOf => {
            for value in &clause.values {
                state.toggle_multi_option(column, value, true);
            }
        }
        MultiOptionOperator::Exclude | MultiOptionOperator::ExcludeIfAnyOf => {
            let operator = if clause.values.len() > 1 {
                MultiOptionOperator::ExcludeIfAnyOf
            } else {
                operator
            };
            let model = FilterModel::MultiOption {
                operator,
                values: vec![clause.values.clone()],
            };
            state.set(&column.id, model)?;
        }
        MultiOptionOperator::IncludeAllOf | MultiOptionOperator::ExcludeIfAllOf => {
            let model = FilterModel::MultiOption {
                operator,
                values: vec![clause.values.clone()],
            };
            state.set(&column.id, model)?;
        }
    }
    Ok(())
}

fn parse_number(s: &str) -> Result<f64> {
    s.parse()
        .map_err(|_| Error::Clause(format!("invalid number: '{s}'")))
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| Error::Clause(format!("invalid date: '{s}' (expected YYYY-MM-DD)")))
}

fn missing_value(clause: &Clause) -> Error {
    Error::Clause(format!(
        "missing value in clause for column '{}'",
        clause.column
    ))
}

fn value_count(clause: &Clause, need: &str) -> Error {
    Error::Clause(format!(
        "operator '{}' on column '{}' expects {need}",
        clause.op, clause.column
    ))
}

fn symbol_mismatch(op: &ClauseOp, column: &ColumnMeta, valid: &'static str) -> Error {
    Error::Clause(format!(
        "operator '{op}' does not apply to {} columns\n  hint: valid operators are: {valid}",
        column.data_type
    ))
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod tests;
