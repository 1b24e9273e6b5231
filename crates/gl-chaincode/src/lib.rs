//! # Guarantee Ledger Chaincode
//!
//! Record store for a two-stage document workflow. A **Request** is raised by
//! a requester and approved by a designated approver; an approved request
//! leads to an issued **Document** (a letter of guarantee by default), which
//! may later be cancelled or superseded. A small credential store holds the
//! participants.
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Entities, key tuples, table layouts, errors
//! - `ports/` - Ledger APIs (inbound) and table store / clock (outbound)
//! - `service/` - Sequential index, credential store, request and document ledgers
//! - `adapters/` - Dispatch façade routing named operations
//!
//! ## Operations
//!
//! | Channel | Name | Arguments |
//! |---------|------|-----------|
//! | invoke | `init` | any |
//! | invoke | `reset_indexes` | none |
//! | invoke | `add_user` | id, userJSON |
//! | invoke | `submit_new_request` | requestType, requester, approver, uid, docJSON, status, permissions |
//! | invoke | `approve_new_request` | requester, approver, uid |
//! | invoke | `approve_request` | requestType, requester, approver, uid |
//! | invoke | `issue_document` | owner, issuer, documentType, uid, dataJSON, status, permissions, expiryDate |
//! | invoke | `supersede_document` | owner, issuer, documentType, previousUid, uid, dataJSON, status, permissions, expiryDate |
//! | invoke | `cancel_lg_document` | owner, issuer, uid |
//! | invoke | `cancel_document` | owner, issuer, documentType, uid |
//! | query | `get_user` | (ignored), userId |
//! | query | `authenticate` | userId, password |
//! | query | `get_request_json` | requester, approver, uid |
//! | query | `get_request` | requestType, requester, approver, uid |
//! | query | `get_request_status` | requester, approver, uid |
//! | query | `get_new_requests` | requester |
//! | query | `get_requests` | requestType, requester |
//! | query | `get_lg_document_json` | owner, issuer, uid |
//! | query | `get_document` | owner, issuer, documentType, uid |
//!
//! The legacy names (`*_new_*`, `*_lg_*`, `get_request_json`,
//! `get_request_status`) bind the request or document type to the defaults
//! in [`ChaincodeConfig`].
//!
//! ## Usage
//!
//! ```ignore
//! use gl_chaincode::{Chaincode, ChaincodeConfig};
//! use gl_table_store::InMemoryTableStore;
//!
//! let chaincode = Chaincode::new(ChaincodeConfig::default());
//! let mut store = InMemoryTableStore::new();
//! chaincode.init(&mut store)?;
//! chaincode.invoke(&mut store, "approve_new_request", &["alice", "bob", "req-1"])?;
//! let listing = chaincode.query(&store, "get_new_requests", &["alice"])?;
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{Chaincode, Channel, Payload, PayloadKind};
pub use config::ChaincodeConfig;
pub use domain::{
    status, AuthenticateResponse, ChaincodeError, Document, DocumentKey, EmbeddedJson,
    NewDocument, NewRequest, Request, RequestKey, RequestList, User,
};
pub use ports::{
    CredentialStoreApi, DocumentLedgerApi, FixedTimeSource, RequestLedgerApi, SystemTimeSource,
    TimeSource,
};
pub use service::{CredentialStore, DocumentLedger, RequestLedger, SequentialIndex};
