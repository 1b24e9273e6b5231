//! # Sequential Index
//!
//! Append-only id sequences, one row per index name. The whole sequence is
//! re-read and re-written on every append, which is sound only because the
//! host admits one invocation at a time.

use crate::domain::schema::INDEX_SEQUENCE_COL;
use crate::domain::ChaincodeError;
use gl_table_store::{ColumnValue, Row, TableStore};
use tracing::{debug, info};

pub struct SequentialIndex {
    table: String,
}

impl SequentialIndex {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// Ids issued so far, oldest first. Absent index reads as empty.
    pub fn entries<S: TableStore>(
        &self,
        store: &S,
        index: &str,
    ) -> Result<Vec<String>, ChaincodeError> {
        let row = store
            .get_row(&self.table, &[ColumnValue::from(index)])
            .map_err(|e| unavailable(index, e))?;
        let Some(row) = row else {
            return Ok(Vec::new());
        };
        let bytes = row
            .bytes(INDEX_SEQUENCE_COL)
            .map_err(|e| unavailable(index, e))?;
        serde_json::from_slice(bytes).map_err(|e| unavailable(index, e))
    }

    /// Append an id and return it.
    ///
    /// With `auto_number` the id is `candidate` followed by the 1-based
    /// position it occupies; otherwise it is `candidate` unchanged.
    pub fn append<S: TableStore>(
        &self,
        store: &mut S,
        index: &str,
        candidate: &str,
        auto_number: bool,
    ) -> Result<String, ChaincodeError> {
        let mut sequence = self.entries(store, index)?;
        let id = if auto_number {
            format!("{candidate}{}", sequence.len() + 1)
        } else {
            candidate.to_string()
        };
        sequence.push(id.clone());
        self.write(store, index, &sequence)?;
        debug!(index, id = %id, position = sequence.len(), "index entry appended");
        Ok(id)
    }

    /// Overwrite each named index with an empty sequence.
    pub fn reset<S: TableStore>(
        &self,
        store: &mut S,
        indexes: &[String],
    ) -> Result<(), ChaincodeError> {
        for index in indexes {
            self.write(store, index, &[])?;
        }
        info!(indexes = ?indexes, "indexes reset");
        Ok(())
    }

    fn write<S: TableStore>(
        &self,
        store: &mut S,
        index: &str,
        sequence: &[String],
    ) -> Result<(), ChaincodeError> {
        let encoded = serde_json::to_vec(sequence)?;
        let row = Row::new(vec![ColumnValue::from(index), ColumnValue::Bytes(encoded)]);
        store.upsert_row(&self.table, row)?;
        Ok(())
    }
}

fn unavailable(index: &str, reason: impl ToString) -> ChaincodeError {
    ChaincodeError::Index {
        index: index.to_string(),
        reason: reason.to_string(),
    }
}
