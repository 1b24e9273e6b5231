//! # Domain Entities
//!
//! Records owned by the ledgers and the response documents built from them.
//! Field order in the serialized form is the field order of each struct.

use crate::domain::value_objects::{DocumentKey, EmbeddedJson, RequestKey};
use serde::{Deserialize, Serialize};

/// A pending or resolved action awaiting approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub request_type: String,
    pub requester: String,
    pub approver: String,
    pub uid: String,
    pub data: EmbeddedJson,
    pub status: String,
    pub permissions: EmbeddedJson,
    pub created_at: String,
}

impl Request {
    pub fn key(&self) -> RequestKey {
        RequestKey::new(
            self.request_type.as_str(),
            self.requester.as_str(),
            self.approver.as_str(),
            self.uid.as_str(),
        )
    }
}

/// An issued instrument, optionally superseding a prior one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub owner: String,
    pub issuer: String,
    pub document_type: String,
    pub uid: String,
    pub data: EmbeddedJson,
    pub status: String,
    pub permissions: EmbeddedJson,
    pub expiry_date: String,
    /// Empty unless this document supersedes another.
    pub previous_uid: String,
    pub created_at: String,
}

impl Document {
    pub fn key(&self) -> DocumentKey {
        DocumentKey::new(
            self.owner.as_str(),
            self.issuer.as_str(),
            self.document_type.as_str(),
            self.uid.as_str(),
        )
    }

    pub fn supersedes(&self) -> Option<&str> {
        (!self.previous_uid.is_empty()).then_some(self.previous_uid.as_str())
    }
}

/// Input to `submit_new_request`. `CreatedAt` is stamped by the ledger.
#[derive(Debug, Clone)]
pub struct NewRequest {
    pub key: RequestKey,
    pub data: EmbeddedJson,
    pub status: String,
    pub permissions: EmbeddedJson,
}

/// Input to `issue_document` / `supersede_document`.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub key: DocumentKey,
    pub data: EmbeddedJson,
    pub status: String,
    pub permissions: EmbeddedJson,
    pub expiry_date: String,
}

/// Result of a filtered listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestList {
    pub count: usize,
    pub data: Vec<Request>,
}

impl RequestList {
    pub fn new(data: Vec<Request>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Credential and profile record.
///
/// Missing fields decode as empty so partially filled records still
/// authenticate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub user_id: String,
    pub salt: String,
    pub hash: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone_number: String,
    pub email_address: String,
    /// Associated document and request ids.
    pub things: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticateResponse {
    pub authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl AuthenticateResponse {
    pub fn denied() -> Self {
        Self {
            authenticated: false,
            user: None,
        }
    }

    pub fn granted(user: User) -> Self {
        Self {
            authenticated: true,
            user: Some(user),
        }
    }
}
