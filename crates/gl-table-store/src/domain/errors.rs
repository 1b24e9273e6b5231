//! # Table Errors
//!
//! Every failure a table store call can report. Absent rows are not errors:
//! `get_row` returns `None` and `scan_rows` yields nothing.

use crate::domain::schema::ColumnType;
use thiserror::Error;

/// Errors raised by table store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The named table has not been created.
    #[error("table not found: {table}")]
    TableNotFound { table: String },

    /// `create_table` on a name that is already taken.
    #[error("table already exists: {table}")]
    TableExists { table: String },

    /// `ensure_table` found the table with different columns.
    #[error("table {table} exists with a different schema")]
    SchemaMismatch { table: String },

    /// Schema rejected at creation time.
    #[error("invalid schema for table {table}: {reason}")]
    InvalidSchema { table: String, reason: String },

    /// Insert against a key tuple that already has a row.
    #[error("row already exists in table {table}")]
    AlreadyExists { table: String },

    /// Replace against a key tuple with no row.
    #[error("row not found in table {table}")]
    NotFound { table: String },

    /// Row has the wrong number of columns.
    #[error("row width mismatch in table {table}: expected {expected} columns, got {actual}")]
    RowWidth {
        table: String,
        expected: usize,
        actual: usize,
    },

    /// A value does not match its column type.
    #[error("column {column} in table {table} expects {expected}")]
    TypeMismatch {
        table: String,
        column: String,
        expected: ColumnType,
    },

    /// Key tuple too long (scan) or not exactly the key width (get).
    #[error("key arity mismatch in table {table}: expected {expected} columns, got {actual}")]
    KeyArity {
        table: String,
        expected: usize,
        actual: usize,
    },

    /// Positional access past the end of a row.
    #[error("column index {index} out of range for row of width {width}")]
    ColumnIndex { index: usize, width: usize },

    /// Positional access with the wrong accessor for the stored type.
    #[error("column {index} does not hold {expected}")]
    ColumnType { index: usize, expected: ColumnType },

    /// Failure inside a backend that is not a key conflict.
    #[error("backend error: {0}")]
    Backend(String),
}
