//! A plain columnar table: named columns of string values, no styling.

use serde::{Deserialize, Serialize};

/// A named column of string values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<String>,
}

/// Columns in a fixed order. Column lengths may differ; `shape` reports the
/// longest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTable {
    pub columns: Vec<Column>,
}

impl ColorTable {
    /// Find a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// (row count, column count), where the row count is the longest column.
    pub fn shape(&self) -> (usize, usize) {
        let nrows = self
            .columns
            .iter()
            .map(|column| column.values.len())
            .max()
            .unwrap_or(0);
        (nrows, self.columns.len())
    }
}
