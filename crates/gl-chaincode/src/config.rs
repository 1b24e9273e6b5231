//! # Chaincode Configuration
//!
//! Table names, index scopes and the default discriminators the legacy
//! operation names bind to. Passed to the dispatcher at construction.

/// Configuration for the chaincode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChaincodeConfig {
    /// Request table name (default: `RequestTable`).
    pub request_table: String,
    /// Document table name (default: `DocumentTable`).
    pub document_table: String,
    /// Credential table name (default: `UserTable`).
    pub user_table: String,
    /// Sequential index table name (default: `IndexTable`).
    pub index_table: String,
    /// Index that records user membership (default: `_users`).
    pub user_index: String,
    /// Indexes cleared by `reset_indexes`.
    pub index_scopes: Vec<String>,
    /// Request type bound by `get_request_json`, `approve_new_request`,
    /// `get_new_requests` and `get_request_status` (default: `new`).
    pub default_request_type: String,
    /// Document type bound by `get_lg_document_json` and
    /// `cancel_lg_document` (default: `LG`).
    pub default_document_type: String,
}

impl Default for ChaincodeConfig {
    fn default() -> Self {
        Self {
            request_table: "RequestTable".to_string(),
            document_table: "DocumentTable".to_string(),
            user_table: "UserTable".to_string(),
            index_table: "IndexTable".to_string(),
            user_index: "_users".to_string(),
            index_scopes: vec!["_users".to_string()],
            default_request_type: "new".to_string(),
            default_document_type: "LG".to_string(),
        }
    }
}

impl ChaincodeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix every table name, e.g. to host two ledgers in one store.
    pub fn with_table_prefix(mut self, prefix: &str) -> Self {
        self.request_table = format!("{prefix}{}", self.request_table);
        self.document_table = format!("{prefix}{}", self.document_table);
        self.user_table = format!("{prefix}{}", self.user_table);
        self.index_table = format!("{prefix}{}", self.index_table);
        self
    }

    /// Set the user membership index. It is also added to the reset scopes.
    pub fn with_user_index(mut self, index: impl Into<String>) -> Self {
        self.user_index = index.into();
        if !self.index_scopes.contains(&self.user_index) {
            self.index_scopes.push(self.user_index.clone());
        }
        self
    }

    pub fn with_index_scopes(mut self, scopes: Vec<String>) -> Self {
        self.index_scopes = scopes;
        self
    }

    pub fn with_default_request_type(mut self, request_type: impl Into<String>) -> Self {
        self.default_request_type = request_type.into();
        self
    }

    pub fn with_default_document_type(mut self, document_type: impl Into<String>) -> Self {
        self.default_document_type = document_type.into();
        self
    }

    /// All table names, in provisioning order.
    pub fn tables(&self) -> [&str; 4] {
        [
            self.request_table.as_str(),
            self.document_table.as_str(),
            self.user_table.as_str(),
            self.index_table.as_str(),
        ]
    }
}
