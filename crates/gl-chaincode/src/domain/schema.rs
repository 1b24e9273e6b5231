//! # Table Layouts
//!
//! Column layouts of the four chaincode tables and the row codecs for each
//! entity. Key columns lead every layout so partial-key scans are prefix
//! scans.

use crate::domain::entities::{Document, Request};
use crate::domain::errors::ChaincodeError;
use crate::domain::value_objects::EmbeddedJson;
use gl_table_store::{ColumnDefinition, ColumnType, Row, TableSchema};

/// Request row positions.
pub(crate) mod request_col {
    pub const REQUEST_TYPE: usize = 0;
    pub const REQUESTER: usize = 1;
    pub const APPROVER: usize = 2;
    pub const UID: usize = 3;
    pub const DOC_JSON: usize = 4;
    pub const STATUS: usize = 5;
    pub const PERMISSIONS: usize = 6;
    pub const CREATED_AT: usize = 7;
}

/// Document row positions.
pub(crate) mod document_col {
    pub const OWNER: usize = 0;
    pub const ISSUER: usize = 1;
    pub const DOCUMENT_TYPE: usize = 2;
    pub const UID: usize = 3;
    pub const DATA_JSON: usize = 4;
    pub const STATUS: usize = 5;
    pub const PERMISSIONS: usize = 6;
    pub const EXPIRY_DATE: usize = 7;
    pub const PREVIOUS_UID: usize = 8;
    pub const CREATED_AT: usize = 9;
}

pub(crate) const USER_RECORD_COL: usize = 1;
pub(crate) const INDEX_SEQUENCE_COL: usize = 1;

pub fn request_schema(table: &str) -> TableSchema {
    TableSchema::new(
        table,
        vec![
            ColumnDefinition::key("RequestType", ColumnType::String),
            ColumnDefinition::key("Requester", ColumnType::String),
            ColumnDefinition::key("Approver", ColumnType::String),
            ColumnDefinition::key("UID", ColumnType::String),
            ColumnDefinition::value("DocJSON", ColumnType::Bytes),
            ColumnDefinition::value("Status", ColumnType::String),
            ColumnDefinition::value("Permissions", ColumnType::Bytes),
            ColumnDefinition::value("CreatedAt", ColumnType::String),
        ],
    )
}

pub fn document_schema(table: &str) -> TableSchema {
    TableSchema::new(
        table,
        vec![
            ColumnDefinition::key("Owner", ColumnType::String),
            ColumnDefinition::key("Issuer", ColumnType::String),
            ColumnDefinition::key("DocumentType", ColumnType::String),
            ColumnDefinition::key("Uid", ColumnType::String),
            ColumnDefinition::value("DataJSON", ColumnType::Bytes),
            ColumnDefinition::value("Status", ColumnType::String),
            ColumnDefinition::value("Permissions", ColumnType::Bytes),
            ColumnDefinition::value("ExpiryDate", ColumnType::String),
            ColumnDefinition::value("PreviousUid", ColumnType::String),
            ColumnDefinition::value("CreatedAt", ColumnType::String),
        ],
    )
}

pub fn user_schema(table: &str) -> TableSchema {
    TableSchema::new(
        table,
        vec![
            ColumnDefinition::key("UserId", ColumnType::String),
            ColumnDefinition::value("Record", ColumnType::Bytes),
        ],
    )
}

pub fn index_schema(table: &str) -> TableSchema {
    TableSchema::new(
        table,
        vec![
            ColumnDefinition::key("IndexName", ColumnType::String),
            ColumnDefinition::value("Sequence", ColumnType::Bytes),
        ],
    )
}

impl Request {
    pub fn to_row(&self) -> Row {
        Row::new(vec![
            self.request_type.as_str().into(),
            self.requester.as_str().into(),
            self.approver.as_str().into(),
            self.uid.as_str().into(),
            self.data.as_bytes().into(),
            self.status.as_str().into(),
            self.permissions.as_bytes().into(),
            self.created_at.as_str().into(),
        ])
    }

    pub fn from_row(row: &Row) -> Result<Self, ChaincodeError> {
        use request_col::*;
        let text = |index| {
            row.string(index)
                .map(str::to_string)
                .map_err(|e| ChaincodeError::corrupt("request", e))
        };
        let json = |index| {
            row.bytes(index)
                .map_err(|e| ChaincodeError::corrupt("request", e))
                .and_then(|bytes| EmbeddedJson::from_stored("request", bytes))
        };
        Ok(Self {
            request_type: text(REQUEST_TYPE)?,
            requester: text(REQUESTER)?,
            approver: text(APPROVER)?,
            uid: text(UID)?,
            data: json(DOC_JSON)?,
            status: text(STATUS)?,
            permissions: json(PERMISSIONS)?,
            created_at: text(CREATED_AT)?,
        })
    }
}

impl Document {
    pub fn to_row(&self) -> Row {
        Row::new(vec![
            self.owner.as_str().into(),
            self.issuer.as_str().into(),
            self.document_type.as_str().into(),
            self.uid.as_str().into(),
            self.data.as_bytes().into(),
            self.status.as_str().into(),
            self.permissions.as_bytes().into(),
            self.expiry_date.as_str().into(),
            self.previous_uid.as_str().into(),
            self.created_at.as_str().into(),
        ])
    }

    pub fn from_row(row: &Row) -> Result<Self, ChaincodeError> {
        use document_col::*;
        let text = |index| {
            row.string(index)
                .map(str::to_string)
                .map_err(|e| ChaincodeError::corrupt("document", e))
        };
        let json = |index| {
            row.bytes(index)
                .map_err(|e| ChaincodeError::corrupt("document", e))
                .and_then(|bytes| EmbeddedJson::from_stored("document", bytes))
        };
        Ok(Self {
            owner: text(OWNER)?,
            issuer: text(ISSUER)?,
            document_type: text(DOCUMENT_TYPE)?,
            uid: text(UID)?,
            data: json(DATA_JSON)?,
            status: text(STATUS)?,
            permissions: json(PERMISSIONS)?,
            expiry_date: text(EXPIRY_DATE)?,
            previous_uid: text(PREVIOUS_UID)?,
            created_at: text(CREATED_AT)?,
        })
    }
}
