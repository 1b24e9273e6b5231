//! # In-Memory Table Store
//!
//! `BTreeMap`-backed tables. Rows are ordered by key tuple, so a prefix scan
//! is a single contiguous range walk.
//!
//! The store is `Clone`, which lets a host checkpoint it before an invocation
//! and restore the checkpoint if the invocation fails. `snapshot` /
//! `from_snapshot` convert to and from a serde-friendly form for persistence.

use crate::domain::errors::TableError;
use crate::domain::row::{ColumnValue, Row};
use crate::domain::schema::{KeyMatch, TableSchema};
use crate::ports::store::{RowScan, TableStore};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::trace;

#[derive(Debug, Clone)]
struct MemTable {
    schema: TableSchema,
    rows: BTreeMap<Vec<ColumnValue>, Row>,
}

/// In-memory composite-key table store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTableStore {
    tables: HashMap<String, MemTable>,
}

/// Persistable form of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub schema: TableSchema,
    pub rows: Vec<Row>,
}

/// Persistable form of the whole store, tables sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub tables: Vec<TableSnapshot>,
}

impl InMemoryTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a snapshot, re-validating every schema and row.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Result<Self, TableError> {
        let mut store = Self::new();
        for table in snapshot.tables {
            let name = table.schema.name.clone();
            store.create_table(table.schema)?;
            for row in table.rows {
                store.insert_row(&name, row)?;
            }
        }
        Ok(store)
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        let mut tables: Vec<TableSnapshot> = self
            .tables
            .values()
            .map(|table| TableSnapshot {
                schema: table.schema.clone(),
                rows: table.rows.values().cloned().collect(),
            })
            .collect();
        tables.sort_by(|a, b| a.schema.name.cmp(&b.schema.name));
        StoreSnapshot { tables }
    }

    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of rows in a table, `None` if the table does not exist.
    pub fn row_count(&self, table: &str) -> Option<usize> {
        self.tables.get(table).map(|t| t.rows.len())
    }

    fn table(&self, name: &str) -> Result<&MemTable, TableError> {
        self.tables.get(name).ok_or_else(|| TableError::TableNotFound {
            table: name.to_string(),
        })
    }

    fn table_mut(&mut self, name: &str) -> Result<&mut MemTable, TableError> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| TableError::TableNotFound {
                table: name.to_string(),
            })
    }
}

impl TableStore for InMemoryTableStore {
    fn create_table(&mut self, schema: TableSchema) -> Result<(), TableError> {
        schema.validate()?;
        if self.tables.contains_key(&schema.name) {
            return Err(TableError::TableExists { table: schema.name });
        }
        trace!(table = %schema.name, columns = schema.width(), "creating table");
        self.tables.insert(
            schema.name.clone(),
            MemTable {
                schema,
                rows: BTreeMap::new(),
            },
        );
        Ok(())
    }

    fn get_table(&self, name: &str) -> Result<Option<TableSchema>, TableError> {
        Ok(self.tables.get(name).map(|t| t.schema.clone()))
    }

    fn insert_row(&mut self, table: &str, row: Row) -> Result<(), TableError> {
        let mem = self.table_mut(table)?;
        let key = mem.schema.key_of(&row)?;
        if mem.rows.contains_key(&key) {
            return Err(TableError::AlreadyExists {
                table: table.to_string(),
            });
        }
        mem.rows.insert(key, row);
        Ok(())
    }

    fn replace_row(&mut self, table: &str, row: Row) -> Result<(), TableError> {
        let mem = self.table_mut(table)?;
        let key = mem.schema.key_of(&row)?;
        match mem.rows.get_mut(&key) {
            Some(slot) => {
                *slot = row;
                Ok(())
            }
            None => Err(TableError::NotFound {
                table: table.to_string(),
            }),
        }
    }

    fn get_row(&self, table: &str, key: &[ColumnValue]) -> Result<Option<Row>, TableError> {
        let mem = self.table(table)?;
        mem.schema.validate_key(key, KeyMatch::Exact)?;
        Ok(mem.rows.get(key).cloned())
    }

    fn scan_rows<'a>(
        &'a self,
        table: &str,
        prefix: &[ColumnValue],
    ) -> Result<RowScan<'a>, TableError> {
        let mem = self.table(table)?;
        mem.schema.validate_key(prefix, KeyMatch::Prefix)?;
        let prefix = prefix.to_vec();
        let rows = mem
            .rows
            .range(prefix.clone()..)
            .take_while(move |(key, _)| key.starts_with(&prefix))
            .map(|(_, row)| row.clone());
        Ok(Box::new(rows))
    }
}
