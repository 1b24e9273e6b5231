//! # Inbound Ports (Driving Ports)
//!
//! Operations each ledger exposes. Every method takes the table store as its
//! transaction context: `&mut S` for mutations, `&S` for reads. The host
//! serializes invocations, so holding the only mutable borrow for the length
//! of a call is the whole concurrency story.

use crate::domain::{
    AuthenticateResponse, ChaincodeError, Document, DocumentKey, NewDocument, NewRequest,
    Request, RequestKey, RequestList,
};
use gl_table_store::TableStore;

/// Request lifecycle: submission, approval, lookup, listing.
pub trait RequestLedgerApi {
    /// Insert a new request. `DuplicateKey` if the key tuple exists.
    fn submit_request<S: TableStore>(
        &self,
        store: &mut S,
        request: NewRequest,
    ) -> Result<Request, ChaincodeError>;

    /// Exact-key fetch. `None` when absent.
    fn get_request<S: TableStore>(
        &self,
        store: &S,
        key: &RequestKey,
    ) -> Result<Option<Request>, ChaincodeError>;

    /// Set status to `approved`, every other column untouched.
    ///
    /// Returns the updated request, or `None` if the key has no row.
    fn approve_request<S: TableStore>(
        &self,
        store: &mut S,
        key: &RequestKey,
    ) -> Result<Option<Request>, ChaincodeError>;

    /// All requests of one type raised by one requester, in scan order.
    fn list_requests<S: TableStore>(
        &self,
        store: &S,
        request_type: &str,
        requester: &str,
    ) -> Result<RequestList, ChaincodeError>;
}

/// Document lifecycle: issuance, supersession, lookup, cancellation.
pub trait DocumentLedgerApi {
    /// Insert a new document with no predecessor.
    fn issue_document<S: TableStore>(
        &self,
        store: &mut S,
        document: NewDocument,
    ) -> Result<Document, ChaincodeError>;

    /// Insert a document whose `previous_uid` names an existing document with
    /// the same owner, issuer and type. The predecessor is not modified.
    fn supersede_document<S: TableStore>(
        &self,
        store: &mut S,
        previous_uid: &str,
        document: NewDocument,
    ) -> Result<Document, ChaincodeError>;

    /// Exact-key fetch. `None` when absent.
    fn get_document<S: TableStore>(
        &self,
        store: &S,
        key: &DocumentKey,
    ) -> Result<Option<Document>, ChaincodeError>;

    /// Set status to `cancelled`. Terminal; repeating it is a no-op.
    fn cancel_document<S: TableStore>(
        &self,
        store: &mut S,
        key: &DocumentKey,
    ) -> Result<Option<Document>, ChaincodeError>;
}

/// Credential records.
pub trait CredentialStoreApi {
    /// Record membership in the user index and store the raw record.
    /// Returns the storage key.
    fn add_user<S: TableStore>(
        &self,
        store: &mut S,
        candidate_id: &str,
        record: &str,
    ) -> Result<String, ChaincodeError>;

    /// Raw stored record. `NotFound` when absent.
    fn get_user<S: TableStore>(&self, store: &S, user_id: &str) -> Result<Vec<u8>, ChaincodeError>;

    /// Existence-based check. Never fails; misses and unreadable records
    /// answer `authenticated: false`.
    fn authenticate<S: TableStore>(
        &self,
        store: &S,
        user_id: &str,
        password: &str,
    ) -> AuthenticateResponse;
}
