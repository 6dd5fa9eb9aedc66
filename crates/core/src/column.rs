// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Column definitions for filterable tables.
//!
//! This module contains the fundamental column types: ColumnDataType,
//! ColumnOption, and ColumnMeta. A column's data type decides which
//! operator set applies and how filter values are shaped.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Classification of columns by the kind of data they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnDataType {
    /// Free text, filtered by substring or equality.
    Text,
    /// Numeric values, filtered by comparison or range.
    Number,
    /// Calendar dates, filtered by point or range.
    Date,
    /// A single choice from a closed option set.
    Option,
    /// A set of choices from a closed option set.
    MultiOption,
}

impl ColumnDataType {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnDataType::Text => "text",
            ColumnDataType::Number => "number",
            ColumnDataType::Date => "date",
            ColumnDataType::Option => "option",
            ColumnDataType::MultiOption => "multi_option",
        }
    }
}

impl fmt::Display for ColumnDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnDataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ColumnDataType::Text),
            "number" => Ok(ColumnDataType::Number),
            "date" => Ok(ColumnDataType::Date),
            "option" => Ok(ColumnDataType::Option),
            "multi_option" | "multi-option" => Ok(ColumnDataType::MultiOption),
            _ => Err(Error::UnknownDataType(s.to_string())),
        }
    }
}

/// One selectable value of an `option` or `multi_option` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnOption {
    /// Unique key identifying the option.
    pub value: String,
    /// Human-readable label shown in filter UIs.
    pub label: String,
    /// Optional display glyph or icon name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ColumnOption {
    /// Creates an option whose label equals its value.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        ColumnOption {
            label: value.clone(),
            value,
            icon: None,
        }
    }

    /// Creates an option with a distinct label.
    pub fn with_label(value: impl Into<String>, label: impl Into<String>) -> Self {
        ColumnOption {
            value: value.into(),
            label: label.into(),
            icon: None,
        }
    }

    /// Sets the display icon (builder pattern).
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Maps a raw cell value to a [`ColumnOption`].
///
/// Used when raw cells are not already option-shaped, for example when a
/// column stores user ids that should surface as display names.
pub type OptionTransform = Arc<dyn Fn(&Value) -> ColumnOption + Send + Sync>;

/// Metadata describing one filterable column.
///
/// `id` may be a dot-separated path into nested row objects
/// (e.g. `"author.name"`).
#[derive(Clone)]
pub struct ColumnMeta {
    /// Unique column identifier; doubles as the cell lookup path.
    pub id: String,
    /// Human-readable column name.
    pub display_name: String,
    /// The kind of data this column holds.
    pub data_type: ColumnDataType,
    /// Optional display glyph or icon name.
    pub icon: Option<String>,
    /// Static option set for option/multi_option columns.
    pub options: Option<Vec<ColumnOption>>,
    /// Maps raw cell values to options when cells are not option-shaped.
    pub transform: Option<OptionTransform>,
    /// Upper display cap for number columns; values at or above the cap
    /// are stored as positive infinity and rendered as `"<cap>+"`.
    pub max: Option<f64>,
}

impl ColumnMeta {
    /// Creates column metadata with no options, transform, or cap.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        data_type: ColumnDataType,
    ) -> Self {
        ColumnMeta {
            id: id.into(),
            display_name: display_name.into(),
            data_type,
            icon: None,
            options: None,
            transform: None,
            max: None,
        }
    }

    /// Sets the display icon (builder pattern).
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the static option set (builder pattern).
    pub fn with_options(mut self, options: Vec<ColumnOption>) -> Self {
        self.options = Some(options);
        self
    }

    /// Sets the raw-value transform (builder pattern).
    pub fn with_transform(mut self, transform: OptionTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Sets the number cap (builder pattern).
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Looks up the display label for an option value.
    ///
    /// Falls back to the raw value when the option set does not list it.
    pub fn option_label<'a>(&'a self, value: &'a str) -> &'a str {
        self.options
            .as_deref()
            .and_then(|opts| opts.iter().find(|o| o.value == value))
            .map(|o| o.label.as_str())
            .unwrap_or(value)
    }
}

impl fmt::Debug for ColumnMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnMeta")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .field("data_type", &self.data_type)
            .field("icon", &self.icon)
            .field("options", &self.options)
            .field("transform", &self.transform.as_ref().map(|_| "<fn>"))
            .field("max", &self.max)
            .finish()
    }
}

#[cfg(test)]
#[path = "column_tests.rs"]
mod tests;
