//! # Table Store Port
//!
//! Production: whatever composite-key store the host platform provides.
//! Testing: `InMemoryTableStore` (adapters/memory.rs).
//!
//! Calls are synchronous and each one is atomic on its own. Callers are
//! serialized by the host, so implementations need no internal locking.

use crate::domain::errors::TableError;
use crate::domain::row::{ColumnValue, Row};
use crate::domain::schema::TableSchema;

/// Lazy, finite, non-restartable sequence of rows produced by a scan.
pub type RowScan<'a> = Box<dyn Iterator<Item = Row> + 'a>;

/// Abstract interface for composite-key table storage.
pub trait TableStore {
    /// Create a table. Fails with `TableExists` if the name is taken.
    fn create_table(&mut self, schema: TableSchema) -> Result<(), TableError>;

    /// Schema of an existing table, `None` if absent.
    fn get_table(&self, name: &str) -> Result<Option<TableSchema>, TableError>;

    /// Insert a new row. Fails with `AlreadyExists` if the key tuple has a row.
    fn insert_row(&mut self, table: &str, row: Row) -> Result<(), TableError>;

    /// Replace an existing row. Fails with `NotFound` if the key tuple has no row.
    fn replace_row(&mut self, table: &str, row: Row) -> Result<(), TableError>;

    /// Exact match on the full key tuple.
    fn get_row(&self, table: &str, key: &[ColumnValue]) -> Result<Option<Row>, TableError>;

    /// All rows whose leading key columns equal `prefix`, in key order.
    fn scan_rows<'a>(
        &'a self,
        table: &str,
        prefix: &[ColumnValue],
    ) -> Result<RowScan<'a>, TableError>;

    /// Create the table if absent.
    ///
    /// Returns `true` when the table was created. An existing table with the
    /// same schema is left untouched; one with a different schema is an error.
    fn ensure_table(&mut self, schema: TableSchema) -> Result<bool, TableError> {
        match self.get_table(&schema.name)? {
            Some(existing) if existing == schema => Ok(false),
            Some(_) => Err(TableError::SchemaMismatch { table: schema.name }),
            None => {
                self.create_table(schema)?;
                Ok(true)
            }
        }
    }

    /// Insert or replace depending on whether the row's key tuple already
    /// has a row. The key is read from the row through the table schema.
    fn upsert_row(&mut self, table: &str, row: Row) -> Result<(), TableError> {
        let schema = self
            .get_table(table)?
            .ok_or_else(|| TableError::TableNotFound {
                table: table.to_string(),
            })?;
        let key = schema.key_of(&row)?;
        if self.get_row(table, &key)?.is_some() {
            self.replace_row(table, row)
        } else {
            self.insert_row(table, row)
        }
    }
}
