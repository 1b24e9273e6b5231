//! # Document Ledger
//!
//! Owns the document table. Documents are issued once, optionally naming a
//! predecessor of the same owner, issuer and type. Cancellation is the only
//! mutation and is terminal.

use crate::domain::schema::document_col;
use crate::domain::{status, ChaincodeError, Document, DocumentKey, NewDocument};
use crate::ports::inbound::DocumentLedgerApi;
use crate::ports::outbound::TimeSource;
use gl_table_store::{ColumnValue, TableError, TableStore};
use tracing::{info, warn};

pub struct DocumentLedger<T: TimeSource> {
    table: String,
    time_source: T,
}

impl<T: TimeSource> DocumentLedger<T> {
    pub fn new(table: impl Into<String>, time_source: T) -> Self {
        Self {
            table: table.into(),
            time_source,
        }
    }

    fn insert<S: TableStore>(
        &self,
        store: &mut S,
        document: NewDocument,
        previous_uid: String,
    ) -> Result<Document, ChaincodeError> {
        let NewDocument {
            key,
            data,
            status,
            permissions,
            expiry_date,
        } = document;
        let document = Document {
            owner: key.owner,
            issuer: key.issuer,
            document_type: key.document_type,
            uid: key.uid,
            data,
            status,
            permissions,
            expiry_date,
            previous_uid,
            created_at: self.time_source.timestamp(),
        };

        match store.insert_row(&self.table, document.to_row()) {
            Ok(()) => Ok(document),
            Err(TableError::AlreadyExists { .. }) => {
                warn!(key = %document.key(), "document already exists");
                Err(ChaincodeError::DuplicateKey {
                    entity: "document",
                    key: document.key().to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl<T: TimeSource> DocumentLedgerApi for DocumentLedger<T> {
    fn issue_document<S: TableStore>(
        &self,
        store: &mut S,
        document: NewDocument,
    ) -> Result<Document, ChaincodeError> {
        let document = self.insert(store, document, String::new())?;
        info!(
            key = %document.key(),
            status = %document.status,
            expiry_date = %document.expiry_date,
            "document issued"
        );
        Ok(document)
    }

    fn supersede_document<S: TableStore>(
        &self,
        store: &mut S,
        previous_uid: &str,
        document: NewDocument,
    ) -> Result<Document, ChaincodeError> {
        let previous = document.key.sibling(previous_uid);
        if store.get_row(&self.table, &previous.to_columns())?.is_none() {
            warn!(previous = %previous, "supersession rejected: predecessor not found");
            return Err(ChaincodeError::PredecessorNotFound {
                key: previous.to_string(),
            });
        }

        let document = self.insert(store, document, previous_uid.to_string())?;
        info!(
            key = %document.key(),
            previous_uid,
            "document issued as replacement"
        );
        Ok(document)
    }

    fn get_document<S: TableStore>(
        &self,
        store: &S,
        key: &DocumentKey,
    ) -> Result<Option<Document>, ChaincodeError> {
        let row = store.get_row(&self.table, &key.to_columns())?;
        row.as_ref().map(Document::from_row).transpose()
    }

    fn cancel_document<S: TableStore>(
        &self,
        store: &mut S,
        key: &DocumentKey,
    ) -> Result<Option<Document>, ChaincodeError> {
        let Some(row) = store.get_row(&self.table, &key.to_columns())? else {
            warn!(key = %key, "cancellation skipped: document not found");
            return Ok(None);
        };

        let row = row.with_column(document_col::STATUS, ColumnValue::from(status::CANCELLED))?;
        let cancelled = Document::from_row(&row)?;
        store.replace_row(&self.table, row)?;

        info!(key = %key, "document cancelled");
        Ok(Some(cancelled))
    }
}
