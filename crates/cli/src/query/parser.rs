// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for filter clauses.
//!
//! Parses clauses like `score >= 10` or `status = todo,in_progress`
//! into structured [`Clause`] values. Operator words are not resolved
//! here; that needs the column's data type and happens in
//! [`super::apply`].

use crate::error::{Error, Result};

use super::expr::{Clause, ClauseOp};

/// Parse a filter clause from a string.
///
/// # Examples
///
/// ```ignore
/// let clause = parse_clause("score >= 10")?;
/// let clause = parse_clause("status = todo,in_progress")?;
/// let clause = parse_clause("title is_empty")?;
/// ```
///
/// # Errors
///
/// Returns an error with a helpful message if the clause is malformed.
pub fn parse_clause(input: &str) -> Result<Clause> {
    let input = input.trim();

    if input.is_empty() {
        return Err(Error::Clause("empty filter clause".to_string()));
    }

    let (column, rest) = split_column(input)?;
    let rest = rest.trim_start();
    let (op, rest) = parse_operator(input, rest)?;

    let raw_value = rest.trim().to_string();
    let values = split_values(&raw_value);

    Ok(Clause {
        column: column.to_string(),
        op,
        values,
        raw_value,
    })
}

/// Split input into column name and rest.
fn split_column(input: &str) -> Result<(&str, &str)> {
    let end = input
        .find(|c: char| c.is_whitespace() || c == '<' || c == '>' || c == '=' || c == '!')
        .unwrap_or(input.len());

    if end == 0 {
        return Err(Error::Clause(format!(
            "missing column name in clause: \"{input}\""
        )));
    }

    Ok((&input[..end], &input[end..]))
}

/// Parse the operator token from the start of the string.
fn parse_operator<'a>(whole: &str, s: &'a str) -> Result<(ClauseOp, &'a str)> {
    // Two-character symbols first.
    if s.len() >= 2 {
        match &s[..2] {
            "<=" => return Ok((ClauseOp::Le, &s[2..])),
            ">=" => return Ok((ClauseOp::Ge, &s[2..])),
            "!=" => return Ok((ClauseOp::Ne, &s[2..])),
            // Catch invalid doubled symbols.
            "<<" | ">>" | "==" => {
                return Err(Error::Clause(format!(
                    "unknown operator '{}'. Valid operators: {}",
                    &s[..2],
                    ClauseOp::valid_symbols()
                )));
            }
            _ => {}
        }
    }

    match s.chars().next() {
        Some('<') => return Ok((ClauseOp::Lt, &s[1..])),
        Some('>') => return Ok((ClauseOp::Gt, &s[1..])),
        Some('=') => return Ok((ClauseOp::Eq, &s[1..])),
        Some('!') => {
            return Err(Error::Clause(format!(
                "unknown operator '!'. Valid operators: {}",
                ClauseOp::valid_symbols()
            )));
        }
        None => {
            return Err(Error::Clause(format!(
                "missing operator in clause: \"{whole}\""
            )));
        }
        _ => {}
    }

    // A word operator: consume up to the next whitespace.
    let end = s
        .find(|c: char| c.is_whitespace())
        .unwrap_or(s.len());
    let word = &s[..end];
    Ok((ClauseOp::Word(word.to_lowercase()), &s[end..]))
}

/// Split value text into a value list.
///
/// `a..b` splits into a two-element range (the upper part may be empty
/// for open-ended ranges); otherwise values split on commas.
fn split_values(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    if let Some((low, high)) = raw.split_once("..") {
        return vec![low.trim().to_string(), high.trim().to_string()];
    }

    raw.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
