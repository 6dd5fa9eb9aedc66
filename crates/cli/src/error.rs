// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the sift CLI.

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] sift_core::Error),

    #[error("invalid schema {path}: {reason}")]
    SchemaInvalid { path: PathBuf, reason: String },

    #[error("unknown column '{name}'\n  hint: available columns are: {available}")]
    UnknownColumn { name: String, available: String },

    #[error("{0}")]
    Clause(String),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
