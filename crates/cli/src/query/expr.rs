// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsed filter clause types.

/// A parsed filter clause.
///
/// Clauses have the form `column op [values]`, for example:
/// - `score >= 10` - rows scoring at least 10
/// - `status = todo,in_progress` - rows in either status
/// - `title is_empty` - rows without a title
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// The column to filter on.
    pub column: String,
    /// The operator token.
    pub op: ClauseOp,
    /// Comma- or range-split values. An open range upper bound is an
    /// empty string.
    pub values: Vec<String>,
    /// The unsplit value text (text filters take it verbatim).
    pub raw_value: String,
}

/// Operator token of a clause: a comparison symbol, or a word resolved
/// against the column type's operator registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseOp {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// A named operator key, e.g. `contains` or `include_any_of`.
    Word(String),
}

impl ClauseOp {
    /// Returns valid operator symbols for error messages.
    pub fn valid_symbols() -> &'static str {
        "=, !=, <, <=, >, >= (or an operator name such as contains, between, any_of)"
    }
}

impl std::fmt::Display for ClauseOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClauseOp::Eq => write!(f, "="),
            ClauseOp::Ne => write!(f, "!="),
            ClauseOp::Lt => write!(f, "<"),
            ClauseOp::Le => write!(f, "<="),
            ClauseOp::Gt => write!(f, ">"),
            ClauseOp::Ge => write!(f, ">="),
            ClauseOp::Word(w) => write!(f, "{w}"),
        }
    }
}

#[cfg(test)]
#[path = "expr_tests.rs"]
mod tests;
