//! # Table Schemas
//!
//! A schema is an ordered list of typed columns, some flagged as key
//! columns. The key tuple of a row is its key columns in definition order.

use crate::domain::errors::TableError;
use crate::domain::row::{ColumnValue, Row};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Column storage type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    String,
    Bytes,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::String => write!(f, "string"),
            ColumnType::Bytes => write!(f, "bytes"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub column_type: ColumnType,
    pub key: bool,
}

impl ColumnDefinition {
    /// A key column.
    pub fn key(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            key: true,
        }
    }

    /// A non-key attribute column.
    pub fn value(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            key: false,
        }
    }
}

/// How a key tuple is matched against the schema's key columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMatch {
    /// Every key column supplied.
    Exact,
    /// Leading key columns only (possibly none).
    Prefix,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
}

impl TableSchema {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDefinition>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Reject schemas without key columns or with duplicate column names.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.name.is_empty() {
            return Err(self.invalid("table name is empty"));
        }
        if self.key_len() == 0 {
            return Err(self.invalid("at least one key column is required"));
        }
        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(self.invalid(&format!("duplicate column {}", column.name)));
            }
        }
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn key_len(&self) -> usize {
        self.key_columns().count()
    }

    pub fn key_columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.columns.iter().filter(|c| c.key)
    }

    /// Check width and per-column types of a full row.
    pub fn validate_row(&self, row: &Row) -> Result<(), TableError> {
        if row.len() != self.width() {
            return Err(TableError::RowWidth {
                table: self.name.clone(),
                expected: self.width(),
                actual: row.len(),
            });
        }
        for (definition, value) in self.columns.iter().zip(&row.columns) {
            self.check_type(definition, value)?;
        }
        Ok(())
    }

    /// Check a key tuple (exact or prefix) against the key columns.
    pub fn validate_key(&self, key: &[ColumnValue], matching: KeyMatch) -> Result<(), TableError> {
        let key_len = self.key_len();
        let arity_ok = match matching {
            KeyMatch::Exact => key.len() == key_len,
            KeyMatch::Prefix => key.len() <= key_len,
        };
        if !arity_ok {
            return Err(TableError::KeyArity {
                table: self.name.clone(),
                expected: key_len,
                actual: key.len(),
            });
        }
        for (definition, value) in self.key_columns().zip(key) {
            self.check_type(definition, value)?;
        }
        Ok(())
    }

    /// Extract the key tuple of a validated row.
    pub fn key_of(&self, row: &Row) -> Result<Vec<ColumnValue>, TableError> {
        self.validate_row(row)?;
        Ok(self
            .columns
            .iter()
            .zip(&row.columns)
            .filter(|(definition, _)| definition.key)
            .map(|(_, value)| value.clone())
            .collect())
    }

    fn check_type(
        &self,
        definition: &ColumnDefinition,
        value: &ColumnValue,
    ) -> Result<(), TableError> {
        if value.column_type() != definition.column_type {
            return Err(TableError::TypeMismatch {
                table: self.name.clone(),
                column: definition.name.clone(),
                expected: definition.column_type,
            });
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> TableError {
        TableError::InvalidSchema {
            table: self.name.clone(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Key columns deliberately interleaved with value columns.
    fn interleaved_schema() -> TableSchema {
        TableSchema::new(
            "Interleaved",
            vec![
                ColumnDefinition::key("Uid", ColumnType::String),
                ColumnDefinition::value("Payload", ColumnType::Bytes),
                ColumnDefinition::key("Kind", ColumnType::String),
                ColumnDefinition::value("Status", ColumnType::String),
            ],
        )
    }

    #[test]
    fn test_key_of_follows_definition_order() {
        let schema = interleaved_schema();
        let row = Row::new(vec![
            "u-1".into(),
            b"{}".to_vec().into(),
            "new".into(),
            "open".into(),
        ]);
        let key = schema.key_of(&row).unwrap();
        assert_eq!(key, vec![ColumnValue::from("u-1"), ColumnValue::from("new")]);
    }

    #[test]
    fn test_validate_rejects_keyless_and_duplicate_columns() {
        let keyless = TableSchema::new(
            "Keyless",
            vec![ColumnDefinition::value("A", ColumnType::String)],
        );
        assert!(matches!(
            keyless.validate(),
            Err(TableError::InvalidSchema { .. })
        ));

        let duplicate = TableSchema::new(
            "Duplicate",
            vec![
                ColumnDefinition::key("A", ColumnType::String),
                ColumnDefinition::value("A", ColumnType::Bytes),
            ],
        );
        assert!(duplicate.validate().is_err());
        assert!(interleaved_schema().validate().is_ok());
    }

    #[test]
    fn test_validate_row_width_and_types() {
        let schema = interleaved_schema();
        let short = Row::new(vec!["u-1".into()]);
        assert!(matches!(
            schema.validate_row(&short),
            Err(TableError::RowWidth {
                expected: 4,
                actual: 1,
                ..
            })
        ));

        let mistyped = Row::new(vec![
            "u-1".into(),
            "not bytes".into(),
            "new".into(),
            "open".into(),
        ]);
        assert!(matches!(
            schema.validate_row(&mistyped),
            Err(TableError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_key_exact_and_prefix() {
        let schema = interleaved_schema();
        let full: Vec<ColumnValue> = vec!["u-1".into(), "new".into()];
        let prefix: Vec<ColumnValue> = vec!["u-1".into()];

        assert!(schema.validate_key(&full, KeyMatch::Exact).is_ok());
        assert!(schema.validate_key(&prefix, KeyMatch::Exact).is_err());
        assert!(schema.validate_key(&prefix, KeyMatch::Prefix).is_ok());
        assert!(schema.validate_key(&[], KeyMatch::Prefix).is_ok());

        let too_long: Vec<ColumnValue> = vec!["a".into(), "b".into(), "c".into()];
        assert!(matches!(
            schema.validate_key(&too_long, KeyMatch::Prefix),
            Err(TableError::KeyArity { expected: 2, actual: 3, .. })
        ));
    }
}
