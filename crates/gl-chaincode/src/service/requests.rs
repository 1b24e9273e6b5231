//! # Request Ledger
//!
//! Owns the request table. Requests are created once, have their status
//! column rewritten on approval and are never deleted.

use crate::domain::schema::request_col;
use crate::domain::{status, ChaincodeError, NewRequest, Request, RequestKey, RequestList};
use crate::ports::inbound::RequestLedgerApi;
use crate::ports::outbound::TimeSource;
use gl_table_store::{ColumnValue, TableError, TableStore};
use tracing::{debug, info, warn};

pub struct RequestLedger<T: TimeSource> {
    table: String,
    time_source: T,
}

impl<T: TimeSource> RequestLedger<T> {
    pub fn new(table: impl Into<String>, time_source: T) -> Self {
        Self {
            table: table.into(),
            time_source,
        }
    }

    /// Bare status of a request, `None` when absent.
    pub fn request_status<S: TableStore>(
        &self,
        store: &S,
        key: &RequestKey,
    ) -> Result<Option<String>, ChaincodeError> {
        let Some(row) = store.get_row(&self.table, &key.to_columns())? else {
            return Ok(None);
        };
        let status = row
            .string(request_col::STATUS)
            .map_err(|e| ChaincodeError::corrupt("request", e))?;
        Ok(Some(status.to_string()))
    }
}

impl<T: TimeSource> RequestLedgerApi for RequestLedger<T> {
    fn submit_request<S: TableStore>(
        &self,
        store: &mut S,
        request: NewRequest,
    ) -> Result<Request, ChaincodeError> {
        let NewRequest {
            key,
            data,
            status,
            permissions,
        } = request;
        let request = Request {
            request_type: key.request_type,
            requester: key.requester,
            approver: key.approver,
            uid: key.uid,
            data,
            status,
            permissions,
            created_at: self.time_source.timestamp(),
        };

        match store.insert_row(&self.table, request.to_row()) {
            Ok(()) => {}
            Err(TableError::AlreadyExists { .. }) => {
                warn!(key = %request.key(), "request already exists");
                return Err(ChaincodeError::DuplicateKey {
                    entity: "request",
                    key: request.key().to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        }

        info!(
            key = %request.key(),
            status = %request.status,
            "request submitted"
        );
        Ok(request)
    }

    fn get_request<S: TableStore>(
        &self,
        store: &S,
        key: &RequestKey,
    ) -> Result<Option<Request>, ChaincodeError> {
        let row = store.get_row(&self.table, &key.to_columns())?;
        row.as_ref().map(Request::from_row).transpose()
    }

    fn approve_request<S: TableStore>(
        &self,
        store: &mut S,
        key: &RequestKey,
    ) -> Result<Option<Request>, ChaincodeError> {
        let Some(row) = store.get_row(&self.table, &key.to_columns())? else {
            warn!(key = %key, "approval skipped: request not found");
            return Ok(None);
        };

        let row = row.with_column(request_col::STATUS, ColumnValue::from(status::APPROVED))?;
        let approved = Request::from_row(&row)?;
        store.replace_row(&self.table, row)?;

        info!(key = %key, "request approved");
        Ok(Some(approved))
    }

    fn list_requests<S: TableStore>(
        &self,
        store: &S,
        request_type: &str,
        requester: &str,
    ) -> Result<RequestList, ChaincodeError> {
        let prefix = [ColumnValue::from(request_type), ColumnValue::from(requester)];
        let requests = store
            .scan_rows(&self.table, &prefix)?
            .map(|row| Request::from_row(&row))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(request_type, requester, count = requests.len(), "requests listed");
        Ok(RequestList::new(requests))
    }
}
