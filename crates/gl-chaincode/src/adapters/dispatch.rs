//! # Dispatch Façade
//!
//! Routes named operations with positional string arguments to the ledgers.
//!
//! ## Architecture
//!
//! ```text
//! Host → Chaincode::invoke / Chaincode::query → ledger service → TableStore
//! ```
//!
//! Invoke operations mutate state and answer with an empty payload. Query
//! operations answer with raw bytes or a JSON document; lookup misses answer
//! with an empty payload rather than an error.

use crate::config::ChaincodeConfig;
use crate::domain::{
    document_schema, index_schema, request_schema, user_schema, ChaincodeError, DocumentKey,
    EmbeddedJson, NewDocument, NewRequest, RequestKey,
};
use crate::ports::inbound::{CredentialStoreApi, DocumentLedgerApi, RequestLedgerApi};
use crate::ports::outbound::{SystemTimeSource, TimeSource};
use crate::service::{CredentialStore, DocumentLedger, RequestLedger, SequentialIndex};
use gl_table_store::{TableSchema, TableStore};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Response payload. `None` is the empty payload.
pub type Payload = Option<Vec<u8>>;

/// Encoding of an operation's payload bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// A serialized JSON document.
    Json,
    /// Stored bytes returned verbatim. They may happen to parse as JSON.
    Bytes,
}

impl PayloadKind {
    /// Payload encoding of `function`. Unknown names and invoke operations
    /// are `Json`; their payloads are empty.
    pub fn of(function: &str) -> Self {
        match function {
            "get_user" | "get_request_status" => PayloadKind::Bytes,
            _ => PayloadKind::Json,
        }
    }
}

/// Entry point an operation is routed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Invoke,
    Query,
}

impl Channel {
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Invoke => "invoke",
            Channel::Query => "query",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The chaincode: configuration plus the ledger components it routes to.
pub struct Chaincode<T: TimeSource + Clone = SystemTimeSource> {
    config: ChaincodeConfig,
    index: SequentialIndex,
    credentials: CredentialStore,
    requests: RequestLedger<T>,
    documents: DocumentLedger<T>,
}

impl Chaincode<SystemTimeSource> {
    pub fn new(config: ChaincodeConfig) -> Self {
        Self::with_time_source(config, SystemTimeSource)
    }
}

impl<T: TimeSource + Clone> Chaincode<T> {
    pub fn with_time_source(config: ChaincodeConfig, time_source: T) -> Self {
        Self {
            index: SequentialIndex::new(config.index_table.as_str()),
            credentials: CredentialStore::new(
                config.user_table.as_str(),
                config.index_table.as_str(),
                config.user_index.as_str(),
            ),
            requests: RequestLedger::new(config.request_table.as_str(), time_source.clone()),
            documents: DocumentLedger::new(config.document_table.as_str(), time_source),
            config,
        }
    }

    pub fn config(&self) -> &ChaincodeConfig {
        &self.config
    }

    /// Layouts of every owned table, in provisioning order.
    pub fn schemas(&self) -> [TableSchema; 4] {
        [
            request_schema(&self.config.request_table),
            document_schema(&self.config.document_table),
            user_schema(&self.config.user_table),
            index_schema(&self.config.index_table),
        ]
    }

    /// Ensure every owned table exists. Safe to repeat.
    pub fn init<S: TableStore>(&self, store: &mut S) -> Result<(), ChaincodeError> {
        for schema in self.schemas() {
            let table = schema.name.clone();
            let created = store
                .ensure_table(schema)
                .map_err(|source| ChaincodeError::Provision {
                    table: table.clone(),
                    source,
                })?;
            if created {
                info!(table = %table, "table provisioned");
            } else {
                debug!(table = %table, "table already present");
            }
        }
        Ok(())
    }

    /// Route an operation on either channel.
    pub fn call<S: TableStore, A: AsRef<str>>(
        &self,
        store: &mut S,
        channel: Channel,
        function: &str,
        args: &[A],
    ) -> Result<Payload, ChaincodeError> {
        match channel {
            Channel::Invoke => self.invoke(store, function, args),
            Channel::Query => self.query(store, function, args),
        }
    }

    /// State-mutating operations.
    pub fn invoke<S: TableStore, A: AsRef<str>>(
        &self,
        store: &mut S,
        function: &str,
        args: &[A],
    ) -> Result<Payload, ChaincodeError> {
        debug!(function, args = args.len(), "invoke");
        match function {
            "init" => self.init(store)?,
            "reset_indexes" => {
                let [] = arity(function, args)?;
                self.index.reset(store, &self.config.index_scopes)?;
            }
            "add_user" => {
                let [id, record] = arity(function, args)?;
                self.credentials.add_user(store, id, record)?;
            }
            "submit_new_request" => {
                let [request_type, requester, approver, uid, doc_json, status, permissions] =
                    arity(function, args)?;
                let request = NewRequest {
                    key: RequestKey::new(request_type, requester, approver, uid),
                    data: EmbeddedJson::parse("docJSON", doc_json)?,
                    status: status.to_string(),
                    permissions: EmbeddedJson::parse("permissions", permissions)?,
                };
                self.requests.submit_request(store, request)?;
            }
            "approve_new_request" => {
                let [requester, approver, uid] = arity(function, args)?;
                let key = self.default_request_key(requester, approver, uid);
                self.requests.approve_request(store, &key)?;
            }
            "approve_request" => {
                let [request_type, requester, approver, uid] = arity(function, args)?;
                let key = RequestKey::new(request_type, requester, approver, uid);
                self.requests.approve_request(store, &key)?;
            }
            "issue_document" => {
                let [owner, issuer, doc_type, uid, data, status, permissions, expiry] =
                    arity(function, args)?;
                let document = new_document(
                    DocumentKey::new(owner, issuer, doc_type, uid),
                    data,
                    status,
                    permissions,
                    expiry,
                )?;
                self.documents.issue_document(store, document)?;
            }
            "supersede_document" => {
                let [owner, issuer, doc_type, previous, uid, data, status, permissions, expiry] =
                    arity(function, args)?;
                let document = new_document(
                    DocumentKey::new(owner, issuer, doc_type, uid),
                    data,
                    status,
                    permissions,
                    expiry,
                )?;
                self.documents.supersede_document(store, previous, document)?;
            }
            "cancel_lg_document" => {
                let [owner, issuer, uid] = arity(function, args)?;
                let key = self.default_document_key(owner, issuer, uid);
                self.documents.cancel_document(store, &key)?;
            }
            "cancel_document" => {
                let [owner, issuer, document_type, uid] = arity(function, args)?;
                let key = DocumentKey::new(owner, issuer, document_type, uid);
                self.documents.cancel_document(store, &key)?;
            }
            _ => return Err(unknown(Channel::Invoke, function)),
        }
        Ok(None)
    }

    /// Read-only operations.
    pub fn query<S: TableStore, A: AsRef<str>>(
        &self,
        store: &S,
        function: &str,
        args: &[A],
    ) -> Result<Payload, ChaincodeError> {
        debug!(function, args = args.len(), "query");
        match function {
            "get_user" => {
                let [_, user_id] = arity(function, args)?;
                Ok(Some(self.credentials.get_user(store, user_id)?))
            }
            "authenticate" => {
                let [user_id, password] = arity(function, args)?;
                json(&self.credentials.authenticate(store, user_id, password))
            }
            "get_request_json" => {
                let [requester, approver, uid] = arity(function, args)?;
                let key = self.default_request_key(requester, approver, uid);
                json_opt(self.requests.get_request(store, &key)?)
            }
            "get_request" => {
                let [request_type, requester, approver, uid] = arity(function, args)?;
                let key = RequestKey::new(request_type, requester, approver, uid);
                json_opt(self.requests.get_request(store, &key)?)
            }
            "get_request_status" => {
                let [requester, approver, uid] = arity(function, args)?;
                let key = self.default_request_key(requester, approver, uid);
                Ok(self.requests.request_status(store, &key)?.map(String::into_bytes))
            }
            "get_new_requests" => {
                let [requester] = arity(function, args)?;
                let request_type = self.config.default_request_type.as_str();
                json(&self.requests.list_requests(store, request_type, requester)?)
            }
            "get_requests" => {
                let [request_type, requester] = arity(function, args)?;
                json(&self.requests.list_requests(store, request_type, requester)?)
            }
            "get_lg_document_json" => {
                let [owner, issuer, uid] = arity(function, args)?;
                let key = self.default_document_key(owner, issuer, uid);
                json_opt(self.documents.get_document(store, &key)?)
            }
            "get_document" => {
                let [owner, issuer, document_type, uid] = arity(function, args)?;
                let key = DocumentKey::new(owner, issuer, document_type, uid);
                json_opt(self.documents.get_document(store, &key)?)
            }
            _ => Err(unknown(Channel::Query, function)),
        }
    }

    fn default_request_key(&self, requester: &str, approver: &str, uid: &str) -> RequestKey {
        RequestKey::new(self.config.default_request_type.as_str(), requester, approver, uid)
    }

    fn default_document_key(&self, owner: &str, issuer: &str, uid: &str) -> DocumentKey {
        DocumentKey::new(owner, issuer, self.config.default_document_type.as_str(), uid)
    }
}

/// Bind exactly `N` positional arguments.
fn arity<'a, A: AsRef<str>, const N: usize>(
    operation: &str,
    args: &'a [A],
) -> Result<[&'a str; N], ChaincodeError> {
    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    <[&str; N]>::try_from(args).map_err(|args| ChaincodeError::argument(operation, N, args.len()))
}

fn new_document(
    key: DocumentKey,
    data_json: &str,
    status: &str,
    permissions: &str,
    expiry_date: &str,
) -> Result<NewDocument, ChaincodeError> {
    Ok(NewDocument {
        key,
        data: EmbeddedJson::parse("dataJSON", data_json)?,
        status: status.to_string(),
        permissions: EmbeddedJson::parse("permissions", permissions)?,
        expiry_date: expiry_date.to_string(),
    })
}

fn json<V: Serialize>(value: &V) -> Result<Payload, ChaincodeError> {
    Ok(Some(serde_json::to_vec(value)?))
}

fn json_opt<V: Serialize>(value: Option<V>) -> Result<Payload, ChaincodeError> {
    value.as_ref().map(serde_json::to_vec).transpose().map_err(Into::into)
}

fn unknown(channel: Channel, function: &str) -> ChaincodeError {
    ChaincodeError::UnknownOperation {
        channel: channel.as_str(),
        name: function.to_string(),
    }
}
