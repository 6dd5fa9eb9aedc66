// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface definition.

use std::path::PathBuf;

use clap::builder::styling::Styles;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

fn help_styles() -> Styles {
    use anstyle::{AnsiColor, Style};
    Styles::styled()
        .header(Style::new().bold().fg_color(Some(AnsiColor::Cyan.into())))
        .usage(Style::new().bold())
        .literal(Style::new().fg_color(Some(AnsiColor::White.into())))
        .placeholder(Style::new().fg_color(Some(AnsiColor::BrightBlack.into())))
}

/// Filter JSONL rows with typed column filters.
#[derive(Parser)]
#[command(name = "sift", version, styles = help_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Filter rows from a JSONL file
    Rows {
        /// Column schema file (TOML)
        #[arg(long, short)]
        schema: PathBuf,

        /// Filter clause, e.g. 'status = todo' (repeatable)
        #[arg(long = "where", short = 'w', value_name = "CLAUSE")]
        clauses: Vec<String>,

        /// Maximum number of rows to print
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print only the number of matching rows
        #[arg(long, conflicts_with = "limit")]
        count: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,

        /// Rows to filter (JSONL, one object per line)
        data: PathBuf,
    },

    /// List columns, their operators, and derived options
    Columns {
        /// Column schema file (TOML)
        #[arg(long, short)]
        schema: PathBuf,

        /// Tally option occurrences from a JSONL file
        #[arg(long, value_name = "DATA")]
        counts: Option<PathBuf>,
    },

    /// Show the filter state a set of clauses produces
    Explain {
        /// Column schema file (TOML)
        #[arg(long, short)]
        schema: PathBuf,

        /// Filter clause, e.g. 'status = todo' (repeatable)
        #[arg(long = "where", short = 'w', value_name = "CLAUSE")]
        clauses: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Output format for `sift rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One formatted line per row
    Text,
    /// Matching rows re-emitted as JSONL
    Json,
}
