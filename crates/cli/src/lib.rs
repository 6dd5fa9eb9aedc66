// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! siftrs - Filter JSONL rows with typed column filters.
//!
//! This crate provides the functionality for the `sift` CLI tool. A TOML
//! schema declares the filterable columns; filter clauses build a
//! [`sift_core::FilterState`] through the core's transition functions;
//! the state's row predicate then decides which JSONL rows pass.
//!
//! # Main Components
//!
//! - [`schema::TableSchema`] - column declarations loaded from TOML
//! - [`query`] - the clause language (`status = todo,in_progress`)
//! - [`Cli`] / [`run`] - argument parsing and command dispatch
//! - [`Error`] - error types for all operations

mod cli;
mod commands;
mod completions;
mod display;
pub mod error;
pub mod query;
pub mod schema;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{Error, Result};

/// Runs a parsed command, printing its output to stdout.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Rows {
            schema,
            clauses,
            limit,
            count,
            output,
            data,
        } => print_lines(commands::rows::run(
            &schema, &clauses, limit, count, output, &data,
        )?),
        Command::Columns { schema, counts } => {
            print_lines(commands::columns::run(&schema, counts.as_deref())?)
        }
        Command::Explain { schema, clauses } => {
            print_lines(commands::explain::run(&schema, &clauses)?)
        }
        Command::Completions { shell } => completions::generate_completions(shell),
    }
    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}
