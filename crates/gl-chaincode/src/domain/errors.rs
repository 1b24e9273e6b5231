//! # Domain Errors
//!
//! Error types for the chaincode.
//!
//! Lookup misses on get/approve/cancel are not errors: those operations
//! return `None` and the dispatcher answers with an empty payload. Every
//! error below is terminal for the invocation that raised it.

use gl_table_store::TableError;
use thiserror::Error;

/// Errors raised by chaincode operations.
#[derive(Debug, Error)]
pub enum ChaincodeError {
    /// Wrong number of positional arguments.
    #[error("incorrect number of arguments for {operation}: expecting {expected}, got {actual}")]
    Argument {
        operation: String,
        expected: usize,
        actual: usize,
    },

    /// Insert against a key tuple that already has a row.
    #[error("{entity} already exists: {key}")]
    DuplicateKey { entity: &'static str, key: String },

    /// Lookup miss on an operation that reports misses (`get_user`).
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// Supersession names a document that does not exist.
    #[error("document to supersede not found: {key}")]
    PredecessorNotFound { key: String },

    /// An opaque payload argument is not well-formed JSON.
    #[error("invalid JSON in {field}: {reason}")]
    InvalidPayload { field: &'static str, reason: String },

    /// A sequential index record could not be read or decoded.
    #[error("index {index} unavailable: {reason}")]
    Index { index: String, reason: String },

    /// A stored row does not decode into its entity.
    #[error("corrupt {entity} record: {reason}")]
    CorruptRecord {
        entity: &'static str,
        reason: String,
    },

    /// Operation name not routed on this channel.
    #[error("unknown {channel} function: {name}")]
    UnknownOperation { channel: &'static str, name: String },

    /// Table creation failed during initialization.
    #[error("failed provisioning table {table}: {source}")]
    Provision {
        table: String,
        #[source]
        source: TableError,
    },

    /// Underlying table operation failed for a reason other than a key conflict.
    #[error("storage error: {0}")]
    Storage(#[from] TableError),

    /// Response document could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ChaincodeError {
    pub(crate) fn argument(operation: &str, expected: usize, actual: usize) -> Self {
        Self::Argument {
            operation: operation.to_string(),
            expected,
            actual,
        }
    }

    pub(crate) fn corrupt(entity: &'static str, reason: impl ToString) -> Self {
        Self::CorruptRecord {
            entity,
            reason: reason.to_string(),
        }
    }
}
