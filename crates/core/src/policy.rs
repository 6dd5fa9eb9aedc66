// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Operator transition policy for multi-option filters.
//!
//! Multi-option filters carry richer relations than the other data types
//! (include/exclude and their any-of/all-of variants), so the operator in
//! effect must follow the selected set as it grows and shrinks. The policy
//! keeps a filter inside its include/exclude family and only moves between
//! the single-value and multi-value variants when the set size crosses one.
//!
//! For every other data type the next operator is decided locally by the
//! construction functions in [`crate::update`]; no policy is needed.

use crate::operators::MultiOptionOperator;

/// Computes the operator a multi-option filter adopts after its selected
/// set changes from `old_len` to `new_len` entries.
///
/// Laws:
/// - Unchanged set size returns `old` (idempotent under no-op edits).
/// - The result stays in `old`'s include/exclude family.
pub fn next_multi_option_operator(
    old: MultiOptionOperator,
    old_len: usize,
    new_len: usize,
) -> MultiOptionOperator {
    let was_single = old_len <= 1;
    let is_single = new_len <= 1;
    if was_single == is_single {
        return old;
    }

    if is_single {
        // Shrank to at most one value: fall back to the single-value
        // variant of the same family.
        match old {
            MultiOptionOperator::Include
            | MultiOptionOperator::IncludeAnyOf
            | MultiOptionOperator::IncludeAllOf => MultiOptionOperator::Include,
            MultiOptionOperator::Exclude
            | MultiOptionOperator::ExcludeIfAnyOf
            | MultiOptionOperator::ExcludeIfAllOf => MultiOptionOperator::Exclude,
        }
    } else {
        // Grew past one value: single-value variants widen to any-of;
        // all-of/any-of variants already handle sets and stay put.
        match old {
            MultiOptionOperator::Include => MultiOptionOperator::IncludeAnyOf,
            MultiOptionOperator::Exclude => MultiOptionOperator::ExcludeIfAnyOf,
            other => other,
        }
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
