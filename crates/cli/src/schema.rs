// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Table schema files.
//!
//! A schema is a TOML file declaring the filterable columns:
//!
//! ```toml
//! [[columns]]
//! id = "status"
//! label = "Status"
//! type = "option"
//! options = [
//!   { value = "todo", label = "Todo", icon = "o" },
//!   "done",
//! ]
//!
//! [[columns]]
//! id = "score"
//! label = "Score"
//! type = "number"
//! max = 100
//! ```
//!
//! Bare-string options use the value as their label. Declarative schemas
//! cannot carry a transform closure; library consumers attach one with
//! [`ColumnMeta::with_transform`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use sift_core::{ColumnDataType, ColumnMeta, ColumnOption};

use crate::error::{Error, Result};

/// The filterable columns of one table, in declaration order.
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub columns: Vec<ColumnMeta>,
}

#[derive(Debug, Deserialize)]
struct SchemaFile {
    #[serde(default)]
    columns: Vec<ColumnEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ColumnEntry {
    id: String,
    label: Option<String>,
    #[serde(rename = "type")]
    data_type: String,
    icon: Option<String>,
    options: Option<Vec<OptionEntry>>,
    max: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OptionEntry {
    Bare(String),
    Full {
        value: String,
        label: Option<String>,
        icon: Option<String>,
    },
}

impl TableSchema {
    /// Loads and validates a schema file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let file: SchemaFile = toml::from_str(&raw)?;
        Self::from_entries(path, file.columns)
    }

    /// Returns the column with the given id.
    pub fn column(&self, name: &str) -> Result<&ColumnMeta> {
        self.columns.iter().find(|c| c.id == name).ok_or_else(|| {
            Error::UnknownColumn {
                name: name.to_string(),
                available: self
                    .columns
                    .iter()
                    .map(|c| c.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }
        })
    }

    fn from_entries(path: &Path, entries: Vec<ColumnEntry>) -> Result<Self> {
        let invalid = |reason: String| Error::SchemaInvalid {
            path: path.to_path_buf(),
            reason,
        };

        if entries.is_empty() {
            return Err(invalid("no columns declared".to_string()));
        }

        let mut columns: Vec<ColumnMeta> = Vec::with_capacity(entries.len());
        for entry in entries {
            if entry.id.trim().is_empty() {
                return Err(invalid("column with empty id".to_string()));
            }
            if columns.iter().any(|c| c.id == entry.id) {
                return Err(invalid(format!("duplicate column id '{}'", entry.id)));
            }

            let data_type: ColumnDataType = entry
                .data_type
                .parse()
                .map_err(|e: sift_core::Error| invalid(e.to_string()))?;

            let takes_options = matches!(
                data_type,
                ColumnDataType::Option | ColumnDataType::MultiOption
            );
            if entry.options.is_some() && !takes_options {
                return Err(invalid(format!(
                    "column '{}' is {data_type} but declares options",
                    entry.id
                )));
            }
            if entry.max.is_some() && data_type != ColumnDataType::Number {
                return Err(invalid(format!(
                    "column '{}' is {data_type} but declares max",
                    entry.id
                )));
            }

            let display_name = entry.label.unwrap_or_else(|| entry.id.clone());
            let mut meta = ColumnMeta::new(entry.id, display_name, data_type);
            if let Some(icon) = entry.icon {
                meta = meta.with_icon(icon);
            }
            if let Some(options) = entry.options {
                meta = meta.with_options(options.into_iter().map(OptionEntry::into_option).collect());
            }
            if let Some(max) = entry.max {
                meta = meta.with_max(max);
            }
            columns.push(meta);
        }

        Ok(TableSchema { columns })
    }
}

impl OptionEntry {
    fn into_option(self) -> ColumnOption {
        match self {
            OptionEntry::Bare(value) => ColumnOption::new(value),
            OptionEntry::Full { value, label, icon } => {
                let mut option = match label {
                    Some(label) => ColumnOption::with_label(value, label),
                    None => ColumnOption::new(value),
                };
                if let Some(icon) = icon {
                    option = option.icon(icon);
                }
                option
            }
        }
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
