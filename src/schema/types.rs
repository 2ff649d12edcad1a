// src/schema/types.rs

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::PathBuf};

use crate::escape::EscapeMode;

/// Header that identifies a lender row. Rows with a blank value here are skipped.
pub const DEFAULT_KEY_HEADER: &str = "Lender Name";

/// One CSV header mapped onto one target column.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct ColumnSpec {
    /// Source header, matched byte for byte (trailing spaces included).
    pub header: String,
    pub column: String,
    #[serde(default)]
    pub mode: EscapeMode,
}

impl ColumnSpec {
    pub fn text(header: &str, column: &str) -> Self {
        Self {
            header: header.to_owned(),
            column: column.to_owned(),
            mode: EscapeMode::Text,
        }
    }

    pub fn numeric(header: &str, column: &str) -> Self {
        Self {
            header: header.to_owned(),
            column: column.to_owned(),
            mode: EscapeMode::Numeric,
        }
    }
}

/// A column filled with the same text literal on every row.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct ConstantColumn {
    pub column: String,
    pub value: String,
}

impl ConstantColumn {
    pub fn new(column: &str, value: &str) -> Self {
        Self {
            column: column.to_owned(),
            value: value.to_owned(),
        }
    }
}

/// Everything needed to turn one lender CSV into INSERTs against one table.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct LenderSchema {
    /// Lookup key in the catalog, e.g. `business_line_of_credit`.
    pub name: String,
    /// Used in the banner comment: `-- Bulk insert IFS <label> lenders`.
    pub label: String,
    /// Used in the totals line: `-- Total <tag> inserts: N`.
    pub tag: String,
    pub table: String,
    #[serde(default = "default_key_header")]
    pub key_header: String,
    pub columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub constants: Vec<ConstantColumn>,
    /// Input CSV. Required for catalog entries beyond BLC and MCA.
    #[serde(default, rename = "csv")]
    pub csv_path: Option<PathBuf>,
}

fn default_key_header() -> String {
    DEFAULT_KEY_HEADER.to_owned()
}

impl LenderSchema {
    /// Target columns in VALUES order: mapped columns, then constants.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|c| c.column.as_str())
            .chain(self.constants.iter().map(|c| c.column.as_str()))
            .collect()
    }

    /// Number of positions in every rendered VALUES list.
    pub fn width(&self) -> usize {
        self.columns.len() + self.constants.len()
    }

    pub fn validate(&self) -> Result<()> {
        if self.table.trim().is_empty() {
            bail!("schema '{}' has an empty table name", self.name);
        }
        if self.columns.is_empty() {
            bail!("schema '{}' maps no columns", self.name);
        }
        let mut seen = HashSet::with_capacity(self.width());
        for col in self.column_names() {
            if col.trim().is_empty() {
                bail!("schema '{}' has an empty target column", self.name);
            }
            if !seen.insert(col) {
                bail!("schema '{}' targets column '{}' twice", self.name, col);
            }
        }
        Ok(())
    }
}
