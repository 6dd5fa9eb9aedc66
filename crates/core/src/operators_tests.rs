// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

/// Registry closure: for every operator, `related()` is non-empty,
/// contains the operator itself, stays inside the registry, and
/// preserves declaration order.
fn assert_registry_closed<O: Operator + std::fmt::Debug>() {
    for op in O::ALL {
        let related = op.related();
        assert!(!related.is_empty(), "{op:?} has no related operators");
        assert!(
            related.contains(op),
            "{op:?} missing from its own related set"
        );
        for r in &related {
            assert!(O::ALL.contains(r), "{r:?} not in registry");
        }
        let positions: Vec<usize> = related
            .iter()
            .map(|r| O::ALL.iter().position(|a| a == r).unwrap())
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "{op:?} related set out of declaration order"
        );
    }
}

#[test]
fn text_registry_closed() {
    assert_registry_closed::<TextOperator>();
}

#[test]
fn number_registry_closed() {
    assert_registry_closed::<NumberOperator>();
}

#[test]
fn date_registry_closed() {
    assert_registry_closed::<DateOperator>();
}

#[test]
fn option_registry_closed() {
    assert_registry_closed::<OptionOperator>();
}

#[test]
fn multi_option_registry_closed() {
    assert_registry_closed::<MultiOptionOperator>();
}

#[test]
fn number_related_spans_both_targets() {
    // Switching between single and range is itself a supported
    // transition, so every number operator relates to the full registry.
    for op in NumberOperator::ALL {
        assert_eq!(op.related(), NumberOperator::ALL.to_vec());
    }
}

#[test]
fn option_related_groups_by_target() {
    assert_eq!(
        OptionOperator::Is.related(),
        vec![OptionOperator::Is, OptionOperator::IsNot]
    );
    assert_eq!(
        OptionOperator::IsAnyOf.related(),
        vec![OptionOperator::IsAnyOf, OptionOperator::IsNoneOf]
    );
}

#[test]
fn multi_option_related_groups_by_target() {
    assert_eq!(
        MultiOptionOperator::Include.related(),
        vec![MultiOptionOperator::Include, MultiOptionOperator::Exclude]
    );
    assert_eq!(
        MultiOptionOperator::IncludeAnyOf.related(),
        vec![
            MultiOptionOperator::IncludeAnyOf,
            MultiOptionOperator::IncludeAllOf,
            MultiOptionOperator::ExcludeIfAnyOf,
            MultiOptionOperator::ExcludeIfAllOf,
        ]
    );
}

#[parameterized(
    contains = { "contains", TextOperator::Contains },
    not_contains = { "not_contains", TextOperator::NotContains },
    is = { "is", TextOperator::Is },
    is_not = { "is_not", TextOperator::IsNot },
    is_empty = { "is_empty", TextOperator::IsEmpty },
    is_not_empty = { "is_not_empty", TextOperator::IsNotEmpty },
)]
fn text_operator_from_str(input: &str, expected: TextOperator) {
    assert_eq!(input.parse::<TextOperator>().unwrap(), expected);
    assert_eq!(expected.as_str(), input);
}

#[parameterized(
    is = { "is", NumberOperator::Is },
    greater_than = { "greater_than", NumberOperator::GreaterThan },
    less_than_or_equal = { "less_than_or_equal", NumberOperator::LessThanOrEqual },
    is_between = { "is_between", NumberOperator::IsBetween },
    is_not_between = { "is_not_between", NumberOperator::IsNotBetween },
)]
fn number_operator_from_str(input: &str, expected: NumberOperator) {
    assert_eq!(input.parse::<NumberOperator>().unwrap(), expected);
    assert_eq!(expected.as_str(), input);
}

#[parameterized(
    is_before_full = { "is_before", DateOperator::IsBefore },
    before_short = { "before", DateOperator::IsBefore },
    on_or_after_short = { "on_or_after", DateOperator::IsOnOrAfter },
    between_short = { "between", DateOperator::IsBetween },
)]
fn date_operator_from_str_accepts_short_forms(input: &str, expected: DateOperator) {
    assert_eq!(input.parse::<DateOperator>().unwrap(), expected);
}

#[parameterized(
    any_of_full = { "is_any_of", OptionOperator::IsAnyOf },
    any_of_short = { "any_of", OptionOperator::IsAnyOf },
    none_of_short = { "none_of", OptionOperator::IsNoneOf },
)]
fn option_operator_from_str_accepts_short_forms(input: &str, expected: OptionOperator) {
    assert_eq!(input.parse::<OptionOperator>().unwrap(), expected);
}

#[parameterized(
    include = { "include", MultiOptionOperator::Include },
    exclude = { "exclude", MultiOptionOperator::Exclude },
    include_any_of = { "include_any_of", MultiOptionOperator::IncludeAnyOf },
    exclude_if_all_of = { "exclude_if_all_of", MultiOptionOperator::ExcludeIfAllOf },
)]
fn multi_option_operator_from_str(input: &str, expected: MultiOptionOperator) {
    assert_eq!(input.parse::<MultiOptionOperator>().unwrap(), expected);
    assert_eq!(expected.as_str(), input);
}

#[test]
fn unknown_operator_error_carries_hint() {
    let err = "glob".parse::<OptionOperator>().unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("'glob'"));
    assert!(msg.contains("is_any_of"));
}

#[parameterized(
    text_empty = { TextOperator::IsEmpty.values_shape(), 0, true },
    text_empty_rejects_value = { TextOperator::IsEmpty.values_shape(), 1, false },
    text_contains = { TextOperator::Contains.values_shape(), 1, true },
    number_between = { NumberOperator::IsBetween.values_shape(), 2, true },
    number_between_rejects_one = { NumberOperator::IsBetween.values_shape(), 1, false },
    option_any_of_empty = { OptionOperator::IsAnyOf.values_shape(), 0, true },
    option_any_of_many = { OptionOperator::IsAnyOf.values_shape(), 5, true },
)]
fn values_shape_accepts(shape: ValuesShape, count: usize, expected: bool) {
    assert_eq!(shape.accepts(count), expected);
}

#[test]
fn operator_details_reflect_registry() {
    let details = NumberOperator::IsBetween.details();
    assert_eq!(details.key, "is_between");
    assert_eq!(details.label, "is between");
    assert_eq!(details.target, OperatorTarget::Multiple);
}

#[parameterized(
    include = { MultiOptionOperator::Include, MultiOptionFamily::Include },
    include_any_of = { MultiOptionOperator::IncludeAnyOf, MultiOptionFamily::Include },
    include_all_of = { MultiOptionOperator::IncludeAllOf, MultiOptionFamily::Include },
    exclude = { MultiOptionOperator::Exclude, MultiOptionFamily::Exclude },
    exclude_if_any_of = { MultiOptionOperator::ExcludeIfAnyOf, MultiOptionFamily::Exclude },
    exclude_if_all_of = { MultiOptionOperator::ExcludeIfAllOf, MultiOptionFamily::Exclude },
)]
fn multi_option_families(op: MultiOptionOperator, family: MultiOptionFamily) {
    assert_eq!(op.family(), family);
}

#[test]
fn operator_serialization_uses_keys() {
    let json = serde_json::to_string(&MultiOptionOperator::IncludeAnyOf).unwrap();
    assert_eq!(json, "\"include_any_of\"");
    let parsed: MultiOptionOperator = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, MultiOptionOperator::IncludeAnyOf);

    let json = serde_json::to_string(&NumberOperator::GreaterThanOrEqual).unwrap();
    assert_eq!(json, "\"greater_than_or_equal\"");
}

#[test]
fn operator_labels_are_human_phrases() {
    assert_eq!(TextOperator::NotContains.label(), "does not contain");
    assert_eq!(NumberOperator::GreaterThanOrEqual.label(), "is greater than or equal to");
    assert_eq!(DateOperator::IsOnOrBefore.label(), "is on or before");
    assert_eq!(OptionOperator::IsAnyOf.label(), "is any of");
    assert_eq!(MultiOptionOperator::ExcludeIfAllOf.label(), "exclude if all of");
}
