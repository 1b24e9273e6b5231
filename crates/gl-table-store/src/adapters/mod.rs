//! # Adapters Layer
//!
//! Concrete `TableStore` implementations.

pub mod memory;

pub use memory::{InMemoryTableStore, StoreSnapshot, TableSnapshot};
