//! # Rows and Column Values

use crate::domain::errors::TableError;
use crate::domain::schema::ColumnType;
use serde::{Deserialize, Serialize};

/// A single typed cell.
///
/// Ordering is derived so key tuples sort lexicographically; all rows sharing
/// a key prefix are therefore contiguous.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ColumnValue {
    String(String),
    Bytes(Vec<u8>),
}

impl ColumnValue {
    pub fn column_type(&self) -> ColumnType {
        match self {
            ColumnValue::String(_) => ColumnType::String,
            ColumnValue::Bytes(_) => ColumnType::Bytes,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ColumnValue::String(s) => Some(s),
            ColumnValue::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ColumnValue::Bytes(b) => Some(b),
            ColumnValue::String(_) => None,
        }
    }
}

impl From<&str> for ColumnValue {
    fn from(value: &str) -> Self {
        ColumnValue::String(value.to_string())
    }
}

impl From<String> for ColumnValue {
    fn from(value: String) -> Self {
        ColumnValue::String(value)
    }
}

impl From<Vec<u8>> for ColumnValue {
    fn from(value: Vec<u8>) -> Self {
        ColumnValue::Bytes(value)
    }
}

impl From<&[u8]> for ColumnValue {
    fn from(value: &[u8]) -> Self {
        ColumnValue::Bytes(value.to_vec())
    }
}

/// A full-width table row, columns in schema definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub columns: Vec<ColumnValue>,
}

impl Row {
    pub fn new(columns: Vec<ColumnValue>) -> Self {
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ColumnValue> {
        self.columns.get(index)
    }

    /// String cell at `index`.
    pub fn string(&self, index: usize) -> Result<&str, TableError> {
        self.cell(index)?
            .as_str()
            .ok_or(TableError::ColumnType {
                index,
                expected: ColumnType::String,
            })
    }

    /// Bytes cell at `index`.
    pub fn bytes(&self, index: usize) -> Result<&[u8], TableError> {
        self.cell(index)?
            .as_bytes()
            .ok_or(TableError::ColumnType {
                index,
                expected: ColumnType::Bytes,
            })
    }

    /// Replace the cell at `index`, returning the updated row.
    pub fn with_column(mut self, index: usize, value: ColumnValue) -> Result<Self, TableError> {
        let width = self.columns.len();
        let slot = self
            .columns
            .get_mut(index)
            .ok_or(TableError::ColumnIndex { index, width })?;
        *slot = value;
        Ok(self)
    }

    pub fn into_columns(self) -> Vec<ColumnValue> {
        self.columns
    }

    fn cell(&self, index: usize) -> Result<&ColumnValue, TableError> {
        self.columns.get(index).ok_or(TableError::ColumnIndex {
            index,
            width: self.columns.len(),
        })
    }
}
