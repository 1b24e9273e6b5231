//! # Keyed Table Store
//!
//! Composite-key table abstraction consumed by the guarantee ledger chaincode.
//!
//! ## Contract
//!
//! | Operation | Behaviour |
//! |-----------|-----------|
//! | `ensure_table` | Creates the table if absent, no-op otherwise |
//! | `insert_row` | Fails with `AlreadyExists` if the key tuple has a row |
//! | `replace_row` | Fails with `NotFound` if no row matches the key tuple |
//! | `get_row` | Exact key match, `None` when absent |
//! | `scan_rows` | Lazy scan of every row whose leading key columns match a prefix |
//!
//! Key columns are the columns flagged `key` in the schema, taken in
//! definition order. Rows are always full width, in definition order.
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Column values, rows, schemas, errors
//! - `ports/` - The `TableStore` trait hosts implement
//! - `adapters/` - `InMemoryTableStore` with snapshot support
//!
//! ## Usage
//!
//! ```ignore
//! use gl_table_store::{ColumnDefinition, ColumnType, InMemoryTableStore, Row, TableSchema, TableStore};
//!
//! let mut store = InMemoryTableStore::new();
//! store.ensure_table(TableSchema::new("Accounts", vec![
//!     ColumnDefinition::key("Owner", ColumnType::String),
//!     ColumnDefinition::value("Payload", ColumnType::Bytes),
//! ]))?;
//! store.insert_row("Accounts", Row::new(vec!["alice".into(), b"{}".to_vec().into()]))?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::memory::{InMemoryTableStore, StoreSnapshot, TableSnapshot};
pub use domain::errors::TableError;
pub use domain::row::{ColumnValue, Row};
pub use domain::schema::{ColumnDefinition, ColumnType, KeyMatch, TableSchema};
pub use ports::store::{RowScan, TableStore};
