// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter clauses for the command line.
//!
//! A clause constrains one column and takes the form:
//!
//! ```text
//! column op [values]
//! ```
//!
//! # Operators
//!
//! - Symbols: `=`, `!=`, `<`, `<=`, `>`, `>=` (mapped per column type)
//! - Words: any operator key of the column's type, e.g. `contains`,
//!   `is_empty`, `between`, `before`, `any_of`, `include_all_of`
//!
//! # Values
//!
//! - Lists are comma-separated: `status = todo,in_progress`
//! - Ranges use `..` and may be open above: `score between 10..50`,
//!   `score between 10..`
//! - Dates use `YYYY-MM-DD`
//!
//! # Examples
//!
//! ```text
//! title contains flaky
//! score >= 10
//! score between 10..100
//! due before 2026-02-01
//! status = todo,in_progress
//! tags include rust
//! tags exclude_if_all_of wip,stale
//! ```

mod apply;
mod expr;
mod parser;

pub use apply::{apply_clause, apply_clauses};
pub use expr::{Clause, ClauseOp};
pub use parser::parse_clause;
