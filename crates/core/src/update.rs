// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Construction and mutation of filter models.
//!
//! Pure per-data-type functions that take the existing filter (if any)
//! and a user-supplied delta, and return the next filter. `None` out
//! means the filter collapsed to absent: consuming code must treat an
//! absent filter as "no constraint", never as "match nothing".
//!
//! All functions are total over their input domain; out-of-order numeric
//! input is sorted and capped input is snapped rather than rejected.

use chrono::NaiveDate;

use crate::bound::snap_to_cap;
use crate::model::FilterModel;
use crate::operators::{
    DateOperator, MultiOptionOperator, NumberOperator, Operator, OperatorTarget, OptionOperator,
    TextOperator, ValuesShape,
};
use crate::policy::next_multi_option_operator;

/// Whether a number filter compares against one value or a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFilterKind {
    /// One comparison value.
    Single,
    /// A `[low, high]` pair.
    Range,
}

/// A calendar selection: a start day and an optional end day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// A single-day selection.
    pub fn day(from: NaiveDate) -> Self {
        DateRange {
            from: Some(from),
            to: None,
        }
    }

    /// A two-day selection.
    pub fn span(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange {
            from: Some(from),
            to: Some(to),
        }
    }
}

/// Replaces the text filter's value.
///
/// With no prior filter the operator defaults to `contains`. A prior
/// filter keeps its operator; presence-check operators carry no value,
/// so editing text under them falls back to `contains`. Empty input
/// collapses the filter.
pub fn set_text(existing: Option<&FilterModel>, input: &str) -> Option<FilterModel> {
    if input.is_empty() {
        return None;
    }

    let operator = match existing {
        Some(FilterModel::Text { operator, .. })
            if operator.values_shape() != ValuesShape::None =>
        {
            *operator
        }
        _ => TextOperator::Contains,
    };

    Some(FilterModel::Text {
        operator,
        values: vec![input.to_string()],
    })
}

/// Sets a text presence check (`is_empty` / `is_not_empty`), which
/// carries no comparison value.
pub fn set_text_presence(operator: TextOperator) -> Option<FilterModel> {
    Some(FilterModel::Text {
        operator,
        values: Vec::new(),
    })
}

/// Replaces the number filter's values.
///
/// Two inputs are sorted ascending before storage. With no prior filter
/// the operator defaults to `is` over the first value. A prior filter
/// keeps its operator and the values are reshaped to match it: single
/// operators keep only the first value; range operators keep two values
/// with the upper bound snapped to the infinity sentinel when it meets
/// the cap. A range fed a single input becomes open-ended above.
pub fn set_number(
    existing: Option<&FilterModel>,
    inputs: &[f64],
    cap: Option<f64>,
) -> Option<FilterModel> {
    let mut sorted: Vec<f64> = inputs.to_vec();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let operator = match existing {
        Some(FilterModel::Number { operator, .. }) => *operator,
        _ => NumberOperator::Is,
    };

    let values = match operator.target() {
        OperatorTarget::Single => vec![sorted[0]],
        OperatorTarget::Multiple => {
            let low = sorted[0];
            let high = sorted.get(1).copied().unwrap_or(f64::INFINITY);
            vec![low, snap_to_cap(high, cap)]
        }
    };

    Some(FilterModel::Number { operator, values })
}

/// Switches a number filter between single-value and range form.
///
/// This is an explicit action distinct from value edits: the operator
/// resets to `is` (single) or `is_between` (range) and the values are
/// reseeded. Moving to a range keeps the prior single value as the upper
/// bound with the lower bound reset to zero; moving to single keeps the
/// prior lower bound.
pub fn change_number_kind(
    existing: Option<&FilterModel>,
    kind: NumberFilterKind,
    cap: Option<f64>,
) -> Option<FilterModel> {
    let old_values: &[f64] = match existing {
        Some(FilterModel::Number { values, .. }) => values,
        _ => &[],
    };

    match kind {
        NumberFilterKind::Single => Some(FilterModel::Number {
            operator: NumberOperator::Is,
            values: vec![old_values.first().copied().unwrap_or(0.0)],
        }),
        NumberFilterKind::Range => {
            let high = old_values.first().copied().unwrap_or(f64::INFINITY);
            Some(FilterModel::Number {
                operator: NumberOperator::IsBetween,
                values: vec![0.0, snap_to_cap(high, cap)],
            })
        }
    }
}

/// Replaces the date filter's selection.
///
/// Two distinct days become a `[from, to]` range (swapped into order if
/// needed); otherwise a single day is stored. The operator follows the
/// value count: it widens to `is_between` when the count grows, narrows
/// to `is` when it shrinks, and is kept when the count is unchanged.
/// An empty selection collapses the filter.
pub fn set_date(existing: Option<&FilterModel>, range: DateRange) -> Option<FilterModel> {
    let (from, to) = match (range.from, range.to) {
        (None, None) => return None,
        (Some(from), to) => (from, to),
        (None, Some(to)) => (to, None),
    };

    let values = match to {
        Some(to) if to != from => {
            if to < from {
                vec![to, from]
            } else {
                vec![from, to]
            }
        }
        _ => vec![from],
    };

    let operator = match existing {
        Some(FilterModel::Date {
            operator,
            values: old,
        }) => {
            if values.len() > old.len() {
                DateOperator::IsBetween
            } else if values.len() < old.len() {
                DateOperator::Is
            } else {
                *operator
            }
        }
        _ => {
            if values.len() == 2 {
                DateOperator::IsBetween
            } else {
                DateOperator::Is
            }
        }
    };

    Some(FilterModel::Date { operator, values })
}

/// Toggles one value of an option filter.
///
/// The first selection yields `is`; a second distinct value upgrades to
/// `is_any_of`; removal downgrades back to `is` at one remaining value
/// and collapses the filter at zero. Filters in the negated family
/// (`is_not` / `is_none_of`) move between those two symmetrically.
pub fn toggle_option(
    existing: Option<&FilterModel>,
    value: &str,
    selected: bool,
) -> Option<FilterModel> {
    let (operator, mut values) = match existing {
        Some(FilterModel::Option { operator, values }) => (*operator, values.clone()),
        _ => (OptionOperator::Is, Vec::new()),
    };

    if selected {
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    } else {
        values.retain(|v| v != value);
    }

    if values.is_empty() {
        return None;
    }

    let negated = matches!(operator, OptionOperator::IsNot | OptionOperator::IsNoneOf);
    let operator = match (values.len() > 1, negated) {
        (false, false) => OptionOperator::Is,
        (false, true) => OptionOperator::IsNot,
        (true, false) => OptionOperator::IsAnyOf,
        (true, true) => OptionOperator::IsNoneOf,
    };

    Some(FilterModel::Option { operator, values })
}

/// Toggles one value of a multi-option filter.
///
/// The first selection yields `include`; later toggles let the
/// transition policy recompute the operator so the filter stays in its
/// include/exclude family. Removing the last value collapses the filter.
pub fn toggle_multi_option(
    existing: Option<&FilterModel>,
    value: &str,
    selected: bool,
) -> Option<FilterModel> {
    let (operator, mut set) = match existing {
        Some(FilterModel::MultiOption { operator, values }) => (
            *operator,
            values.first().cloned().unwrap_or_default(),
        ),
        _ => (MultiOptionOperator::Include, Vec::new()),
    };

    let old_len = set.len();
    if selected {
        if !set.iter().any(|v| v == value) {
            set.push(value.to_string());
        }
    } else {
        set.retain(|v| v != value);
    }

    if set.is_empty() {
        return None;
    }

    let operator = next_multi_option_operator(operator, old_len, set.len());
    Some(FilterModel::MultiOption {
        operator,
        values: vec![set],
    })
}

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;
