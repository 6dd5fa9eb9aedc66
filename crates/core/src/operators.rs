// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Operator registries for each column data type.
//!
//! Every data type has a closed operator set declared in registry order.
//! Each operator knows its string key, human label, target classification
//! (single value vs. multiple values), and the value count it accepts.
//! Downstream logic uses the target to group related operators in a
//! switcher menu and to reshape stored values when the operator changes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Whether an operator compares against one value or against several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorTarget {
    /// Compares against a single value.
    Single,
    /// Compares against a pair (range) or a set of values.
    Multiple,
}

/// How many stored values an operator is syntactically valid with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuesShape {
    /// No value (presence checks such as `is_empty`).
    None,
    /// Exactly one value.
    One,
    /// Exactly two values (ranges).
    Two,
    /// Any number of values (selected-set operators).
    Many,
}

impl ValuesShape {
    /// Returns true if `count` stored values satisfy this shape.
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            ValuesShape::None => count == 0,
            ValuesShape::One => count == 1,
            ValuesShape::Two => count == 2,
            ValuesShape::Many => true,
        }
    }

    /// Returns the expected count for error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            ValuesShape::None => "no",
            ValuesShape::One => "exactly 1",
            ValuesShape::Two => "exactly 2",
            ValuesShape::Many => "any number of",
        }
    }
}

/// Registry entry for one operator: key, label, and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorDetails {
    /// String key used in storage and filter clauses.
    pub key: &'static str,
    /// Human-readable label shown in filter UIs.
    pub label: &'static str,
    /// Single-value or multiple-value classification.
    pub target: OperatorTarget,
}

/// Common surface of every per-data-type operator registry.
pub trait Operator: Copy + Eq + Sized + 'static {
    /// All operators of this data type, in registry declaration order.
    const ALL: &'static [Self];

    /// Comma-separated operator keys for error messages.
    const VALID_KEYS: &'static str;

    /// Returns the string key used in storage and filter clauses.
    fn as_str(&self) -> &'static str;

    /// Returns the human-readable label.
    fn label(&self) -> &'static str;

    /// Returns the single/multiple target classification.
    fn target(&self) -> OperatorTarget;

    /// Returns how many stored values this operator accepts.
    fn values_shape(&self) -> ValuesShape;

    /// Returns the registry entry for this operator.
    fn details(&self) -> OperatorDetails {
        OperatorDetails {
            key: self.as_str(),
            label: self.label(),
            target: self.target(),
        }
    }

    /// Returns all operators sharing this operator's target, in registry
    /// order. Always contains `self`.
    fn related(&self) -> Vec<Self> {
        let target = self.target();
        Self::ALL
            .iter()
            .copied()
            .filter(|op| op.target() == target)
            .collect()
    }
}

/// Operators for `text` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextOperator {
    /// Case-insensitive substring match.
    Contains,
    /// Negated substring match.
    NotContains,
    /// Exact equality.
    Is,
    /// Negated equality.
    IsNot,
    /// Cell is absent, null, or the empty string.
    IsEmpty,
    /// Cell holds a non-empty value.
    IsNotEmpty,
}

impl Operator for TextOperator {
    const ALL: &'static [Self] = &[
        TextOperator::Contains,
        TextOperator::NotContains,
        TextOperator::Is,
        TextOperator::IsNot,
        TextOperator::IsEmpty,
        TextOperator::IsNotEmpty,
    ];

    const VALID_KEYS: &'static str = "contains, not_contains, is, is_not, is_empty, is_not_empty";

    fn as_str(&self) -> &'static str {
        match self {
            TextOperator::Contains => "contains",
            TextOperator::NotContains => "not_contains",
            TextOperator::Is => "is",
            TextOperator::IsNot => "is_not",
            TextOperator::IsEmpty => "is_empty",
            TextOperator::IsNotEmpty => "is_not_empty",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TextOperator::Contains => "contains",
            TextOperator::NotContains => "does not contain",
            TextOperator::Is => "is",
            TextOperator::IsNot => "is not",
            TextOperator::IsEmpty => "is empty",
            TextOperator::IsNotEmpty => "is not empty",
        }
    }

    fn target(&self) -> OperatorTarget {
        OperatorTarget::Single
    }

    fn values_shape(&self) -> ValuesShape {
        match self {
            TextOperator::IsEmpty | TextOperator::IsNotEmpty => ValuesShape::None,
            _ => ValuesShape::One,
        }
    }
}

impl fmt::Display for TextOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TextOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "contains" => Ok(TextOperator::Contains),
            "not_contains" => Ok(TextOperator::NotContains),
            "is" => Ok(TextOperator::Is),
            "is_not" => Ok(TextOperator::IsNot),
            "is_empty" => Ok(TextOperator::IsEmpty),
            "is_not_empty" => Ok(TextOperator::IsNotEmpty),
            _ => Err(Error::UnknownOperator {
                data_type: "text",
                key: s.to_string(),
                valid: Self::VALID_KEYS,
            }),
        }
    }
}

/// Operators for `number` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberOperator {
    /// Exact equality.
    Is,
    /// Negated equality.
    IsNot,
    /// Strictly greater than the bound.
    GreaterThan,
    /// Greater than or equal to the bound.
    GreaterThanOrEqual,
    /// Strictly less than the bound.
    LessThan,
    /// Less than or equal to the bound.
    LessThanOrEqual,
    /// Inclusive range; the upper bound may be positive infinity.
    IsBetween,
    /// Negated inclusive range.
    IsNotBetween,
}

impl Operator for NumberOperator {
    const ALL: &'static [Self] = &[
        NumberOperator::Is,
        NumberOperator::IsNot,
        NumberOperator::GreaterThan,
        NumberOperator::GreaterThanOrEqual,
        NumberOperator::LessThan,
        NumberOperator::LessThanOrEqual,
        NumberOperator::IsBetween,
        NumberOperator::IsNotBetween,
    ];

    const VALID_KEYS: &'static str = "is, is_not, greater_than, greater_than_or_equal, less_than, less_than_or_equal, is_between, is_not_between";

    fn as_str(&self) -> &'static str {
        match self {
            NumberOperator::Is => "is",
            NumberOperator::IsNot => "is_not",
            NumberOperator::GreaterThan => "greater_than",
            NumberOperator::GreaterThanOrEqual => "greater_than_or_equal",
            NumberOperator::LessThan => "less_than",
            NumberOperator::LessThanOrEqual => "less_than_or_equal",
            NumberOperator::IsBetween => "is_between",
            NumberOperator::IsNotBetween => "is_not_between",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            NumberOperator::Is => "is",
            NumberOperator::IsNot => "is not",
            NumberOperator::GreaterThan => "is greater than",
            NumberOperator::GreaterThanOrEqual => "is greater than or equal to",
            NumberOperator::LessThan => "is less than",
            NumberOperator::LessThanOrEqual => "is less than or equal to",
            NumberOperator::IsBetween => "is between",
            NumberOperator::IsNotBetween => "is not between",
        }
    }

    fn target(&self) -> OperatorTarget {
        match self {
            NumberOperator::IsBetween | NumberOperator::IsNotBetween => OperatorTarget::Multiple,
            _ => OperatorTarget::Single,
        }
    }

    fn values_shape(&self) -> ValuesShape {
        match self.target() {
            OperatorTarget::Single => ValuesShape::One,
            OperatorTarget::Multiple => ValuesShape::Two,
        }
    }

    /// All number operators are related: switching between single and
    /// range operators is itself a supported transition, so the switcher
    /// offers the full registry.
    fn related(&self) -> Vec<Self> {
        Self::ALL.to_vec()
    }
}

impl fmt::Display for NumberOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NumberOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "is" => Ok(NumberOperator::Is),
            "is_not" => Ok(NumberOperator::IsNot),
            "greater_than" => Ok(NumberOperator::GreaterThan),
            "greater_than_or_equal" => Ok(NumberOperator::GreaterThanOrEqual),
            "less_than" => Ok(NumberOperator::LessThan),
            "less_than_or_equal" => Ok(NumberOperator::LessThanOrEqual),
            "is_between" | "between" => Ok(NumberOperator::IsBetween),
            "is_not_between" | "not_between" => Ok(NumberOperator::IsNotBetween),
            _ => Err(Error::UnknownOperator {
                data_type: "number",
                key: s.to_string(),
                valid: Self::VALID_KEYS,
            }),
        }
    }
}

/// Operators for `date` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOperator {
    /// Same calendar day.
    Is,
    /// Different calendar day.
    IsNot,
    /// Strictly before the day.
    IsBefore,
    /// On or before the day.
    IsOnOrBefore,
    /// Strictly after the day.
    IsAfter,
    /// On or after the day.
    IsOnOrAfter,
    /// Inclusive day range.
    IsBetween,
    /// Negated inclusive day range.
    IsNotBetween,
}

impl Operator for DateOperator {
    const ALL: &'static [Self] = &[
        DateOperator::Is,
        DateOperator::IsNot,
        DateOperator::IsBefore,
        DateOperator::IsOnOrBefore,
        DateOperator::IsAfter,
        DateOperator::IsOnOrAfter,
        DateOperator::IsBetween,
        DateOperator::IsNotBetween,
    ];

    const VALID_KEYS: &'static str = "is, is_not, is_before, is_on_or_before, is_after, is_on_or_after, is_between, is_not_between";

    fn as_str(&self) -> &'static str {
        match self {
            DateOperator::Is => "is",
            DateOperator::IsNot => "is_not",
            DateOperator::IsBefore => "is_before",
            DateOperator::IsOnOrBefore => "is_on_or_before",
            DateOperator::IsAfter => "is_after",
            DateOperator::IsOnOrAfter => "is_on_or_after",
            DateOperator::IsBetween => "is_between",
            DateOperator::IsNotBetween => "is_not_between",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DateOperator::Is => "is",
            DateOperator::IsNot => "is not",
            DateOperator::IsBefore => "is before",
            DateOperator::IsOnOrBefore => "is on or before",
            DateOperator::IsAfter => "is after",
            DateOperator::IsOnOrAfter => "is on or after",
            DateOperator::IsBetween => "is between",
            DateOperator::IsNotBetween => "is not between",
        }
    }

    fn target(&self) -> OperatorTarget {
        match self {
            DateOperator::IsBetween | DateOperator::IsNotBetween => OperatorTarget::Multiple,
            _ => OperatorTarget::Single,
        }
    }

    fn values_shape(&self) -> ValuesShape {
        match self.target() {
            OperatorTarget::Single => ValuesShape::One,
            OperatorTarget::Multiple => ValuesShape::Two,
        }
    }
}

impl fmt::Display for DateOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DateOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "is" => Ok(DateOperator::Is),
            "is_not" => Ok(DateOperator::IsNot),
            "is_before" | "before" => Ok(DateOperator::IsBefore),
            "is_on_or_before" | "on_or_before" => Ok(DateOperator::IsOnOrBefore),
            "is_after" | "after" => Ok(DateOperator::IsAfter),
            "is_on_or_after" | "on_or_after" => Ok(DateOperator::IsOnOrAfter),
            "is_between" | "between" => Ok(DateOperator::IsBetween),
            "is_not_between" | "not_between" => Ok(DateOperator::IsNotBetween),
            _ => Err(Error::UnknownOperator {
                data_type: "date",
                key: s.to_string(),
                valid: Self::VALID_KEYS,
            }),
        }
    }
}

/// Operators for `option` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionOperator {
    /// Cell equals the single selected value.
    Is,
    /// Cell differs from the single selected value.
    IsNot,
    /// Cell is one of the selected values.
    IsAnyOf,
    /// Cell is none of the selected values.
    IsNoneOf,
}

impl Operator for OptionOperator {
    const ALL: &'static [Self] = &[
        OptionOperator::Is,
        OptionOperator::IsNot,
        OptionOperator::IsAnyOf,
        OptionOperator::IsNoneOf,
    ];

    const VALID_KEYS: &'static str = "is, is_not, is_any_of, is_none_of";

    fn as_str(&self) -> &'static str {
        match self {
            OptionOperator::Is => "is",
            OptionOperator::IsNot => "is_not",
            OptionOperator::IsAnyOf => "is_any_of",
            OptionOperator::IsNoneOf => "is_none_of",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            OptionOperator::Is => "is",
            OptionOperator::IsNot => "is not",
            OptionOperator::IsAnyOf => "is any of",
            OptionOperator::IsNoneOf => "is none of",
        }
    }

    fn target(&self) -> OperatorTarget {
        match self {
            OptionOperator::Is | OptionOperator::IsNot => OperatorTarget::Single,
            OptionOperator::IsAnyOf | OptionOperator::IsNoneOf => OperatorTarget::Multiple,
        }
    }

    fn values_shape(&self) -> ValuesShape {
        match self.target() {
            OperatorTarget::Single => ValuesShape::One,
            OperatorTarget::Multiple => ValuesShape::Many,
        }
    }
}

impl fmt::Display for OptionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OptionOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "is" => Ok(OptionOperator::Is),
            "is_not" => Ok(OptionOperator::IsNot),
            "is_any_of" | "any_of" => Ok(OptionOperator::IsAnyOf),
            "is_none_of" | "none_of" => Ok(OptionOperator::IsNoneOf),
            _ => Err(Error::UnknownOperator {
                data_type: "option",
                key: s.to_string(),
                valid: Self::VALID_KEYS,
            }),
        }
    }
}

/// Semantic family of a multi-option operator.
///
/// The transition policy keeps a filter inside its family when the
/// selected-set size crosses one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiOptionFamily {
    /// Rows must carry the selected value(s).
    Include,
    /// Rows must lack the selected value(s).
    Exclude,
}

/// Operators for `multi_option` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiOptionOperator {
    /// Cell set contains the single selected value.
    Include,
    /// Cell set lacks the single selected value.
    Exclude,
    /// Cell set intersects the selected set.
    IncludeAnyOf,
    /// Cell set is a superset of the selected set.
    IncludeAllOf,
    /// Cell set is disjoint from the selected set.
    ExcludeIfAnyOf,
    /// Cell set is not a superset of the selected set.
    ExcludeIfAllOf,
}

impl Operator for MultiOptionOperator {
    const ALL: &'static [Self] = &[
        MultiOptionOperator::Include,
        MultiOptionOperator::Exclude,
        MultiOptionOperator::IncludeAnyOf,
        MultiOptionOperator::IncludeAllOf,
        MultiOptionOperator::ExcludeIfAnyOf,
        MultiOptionOperator::ExcludeIfAllOf,
    ];

    const VALID_KEYS: &'static str =
        "include, exclude, include_any_of, include_all_of, exclude_if_any_of, exclude_if_all_of";

    fn as_str(&self) -> &'static str {
        match self {
            MultiOptionOperator::Include => "include",
            MultiOptionOperator::Exclude => "exclude",
            MultiOptionOperator::IncludeAnyOf => "include_any_of",
            MultiOptionOperator::IncludeAllOf => "include_all_of",
            MultiOptionOperator::ExcludeIfAnyOf => "exclude_if_any_of",
            MultiOptionOperator::ExcludeIfAllOf => "exclude_if_all_of",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            MultiOptionOperator::Include => "include",
            MultiOptionOperator::Exclude => "exclude",
            MultiOptionOperator::IncludeAnyOf => "include any of",
            MultiOptionOperator::IncludeAllOf => "include all of",
            MultiOptionOperator::ExcludeIfAnyOf => "exclude if any of",
            MultiOptionOperator::ExcludeIfAllOf => "exclude if all of",
        }
    }

    fn target(&self) -> OperatorTarget {
        match self {
            MultiOptionOperator::Include | MultiOptionOperator::Exclude => OperatorTarget::Single,
            _ => OperatorTarget::Multiple,
        }
    }

    fn values_shape(&self) -> ValuesShape {
        ValuesShape::Many
    }
}

impl MultiOptionOperator {
    /// Returns this operator's include/exclude family.
    pub fn family(&self) -> MultiOptionFamily {
        match self {
            MultiOptionOperator::Include
            | MultiOptionOperator::IncludeAnyOf
            | MultiOptionOperator::IncludeAllOf => MultiOptionFamily::Include,
            MultiOptionOperator::Exclude
            | MultiOptionOperator::ExcludeIfAnyOf
            | MultiOptionOperator::ExcludeIfAllOf => MultiOptionFamily::Exclude,
        }
    }
}

impl fmt::Display for MultiOptionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MultiOptionOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "include" => Ok(MultiOptionOperator::Include),
            "exclude" => Ok(MultiOptionOperator::Exclude),
            "include_any_of" => Ok(MultiOptionOperator::IncludeAnyOf),
            "include_all_of" => Ok(MultiOptionOperator::IncludeAllOf),
            "exclude_if_any_of" => Ok(MultiOptionOperator::ExcludeIfAnyOf),
            "exclude_if_all_of" => Ok(MultiOptionOperator::ExcludeIfAllOf),
            _ => Err(Error::UnknownOperator {
                data_type: "multi_option",
                key: s.to_string(),
                valid: Self::VALID_KEYS,
            }),
        }
    }
}

#[cfg(test)]
#[path = "operators_tests.rs"]
mod tests;
