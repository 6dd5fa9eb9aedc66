// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sift-core operations.

use thiserror::Error;

/// All possible errors that can occur in sift-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown operator '{key}' for {data_type} columns\n  hint: valid operators are: {valid}")]
    UnknownOperator {
        data_type: &'static str,
        key: String,
        valid: &'static str,
    },

    #[error("invalid column type: '{0}'\n  hint: valid types are: text, number, date, option, multi_option")]
    UnknownDataType(String),

    #[error("operator '{operator}' expects {expected} value(s), got {got}")]
    InvalidShape {
        operator: &'static str,
        expected: &'static str,
        got: usize,
    },

    #[error("column '{column}' has no option source\n  hint: supply static options, a transform function, or option-shaped cell values")]
    OptionSourceMissing { column: String },

    #[error("{0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for sift-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
