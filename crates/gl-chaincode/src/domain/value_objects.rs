//! # Value Objects
//!
//! Status vocabulary, key tuples and the embedded JSON payload type.

use crate::domain::errors::ChaincodeError;
use gl_table_store::ColumnValue;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use std::fmt;

/// Well-known status strings. Status columns are free-form; these are the
/// values the ledgers themselves write or expect callers to use.
pub mod status {
    pub const NEW: &str = "new";
    pub const APPROVED: &str = "approved";
    pub const ISSUED: &str = "issued";
    pub const CANCELLED: &str = "cancelled";
}

/// Caller-supplied JSON document embedded verbatim in responses.
///
/// Validated once on the way in; serializes as the original JSON text, not
/// as an escaped string. Whitespace surrounding the document is dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmbeddedJson(Box<RawValue>);

impl EmbeddedJson {
    /// Validate an argument as JSON. `field` names it in the error.
    pub fn parse(field: &'static str, text: &str) -> Result<Self, ChaincodeError> {
        RawValue::from_string(text.to_string())
            .map(Self)
            .map_err(|e| ChaincodeError::InvalidPayload {
                field,
                reason: e.to_string(),
            })
    }

    /// Decode a stored column back into an embedded document.
    pub fn from_stored(entity: &'static str, bytes: &[u8]) -> Result<Self, ChaincodeError> {
        let text = std::str::from_utf8(bytes).map_err(|e| ChaincodeError::corrupt(entity, e))?;
        RawValue::from_string(text.to_string())
            .map(Self)
            .map_err(|e| ChaincodeError::corrupt(entity, e))
    }

    pub fn as_str(&self) -> &str {
        self.0.get()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.get().as_bytes()
    }

    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(self.0.get())
    }
}

impl PartialEq for EmbeddedJson {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for EmbeddedJson {}

impl fmt::Display for EmbeddedJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite key of a Request row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestKey {
    pub request_type: String,
    pub requester: String,
    pub approver: String,
    pub uid: String,
}

impl RequestKey {
    pub fn new(
        request_type: impl Into<String>,
        requester: impl Into<String>,
        approver: impl Into<String>,
        uid: impl Into<String>,
    ) -> Self {
        Self {
            request_type: request_type.into(),
            requester: requester.into(),
            approver: approver.into(),
            uid: uid.into(),
        }
    }

    pub fn to_columns(&self) -> Vec<ColumnValue> {
        vec![
            self.request_type.as_str().into(),
            self.requester.as_str().into(),
            self.approver.as_str().into(),
            self.uid.as_str().into(),
        ]
    }
}

impl fmt::Display for RequestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.request_type, self.requester, self.approver, self.uid
        )
    }
}

/// Composite key of a Document row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentKey {
    pub owner: String,
    pub issuer: String,
    pub document_type: String,
    pub uid: String,
}

impl DocumentKey {
    pub fn new(
        owner: impl Into<String>,
        issuer: impl Into<String>,
        document_type: impl Into<String>,
        uid: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            issuer: issuer.into(),
            document_type: document_type.into(),
            uid: uid.into(),
        }
    }

    /// Same owner, issuer and type; different uid.
    pub fn sibling(&self, uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..self.clone()
        }
    }

    pub fn to_columns(&self) -> Vec<ColumnValue> {
        vec![
            self.owner.as_str().into(),
            self.issuer.as_str().into(),
            self.document_type.as_str().into(),
            self.uid.as_str().into(),
        ]
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.owner, self.issuer, self.document_type, self.uid
        )
    }
}
