//! # Credential Store
//!
//! User records keyed by their literal id. Every `add_user` records the id in
//! the user membership index before the record is written.

use crate::domain::schema::USER_RECORD_COL;
use crate::domain::{AuthenticateResponse, ChaincodeError, User};
use crate::ports::inbound::CredentialStoreApi;
use crate::service::index::SequentialIndex;
use gl_table_store::{ColumnValue, Row, TableStore};
use tracing::{debug, info, warn};

pub struct CredentialStore {
    table: String,
    user_index: String,
    index: SequentialIndex,
}

impl CredentialStore {
    pub fn new(
        table: impl Into<String>,
        index_table: impl Into<String>,
        user_index: impl Into<String>,
    ) -> Self {
        Self {
            table: table.into(),
            user_index: user_index.into(),
            index: SequentialIndex::new(index_table),
        }
    }

    fn lookup<S: TableStore>(
        &self,
        store: &S,
        user_id: &str,
    ) -> Result<Option<Vec<u8>>, ChaincodeError> {
        let Some(row) = store.get_row(&self.table, &[ColumnValue::from(user_id)])? else {
            return Ok(None);
        };
        let record = row
            .bytes(USER_RECORD_COL)
            .map_err(|e| ChaincodeError::corrupt("user", e))?;
        Ok(Some(record.to_vec()))
    }
}

impl CredentialStoreApi for CredentialStore {
    fn add_user<S: TableStore>(
        &self,
        store: &mut S,
        candidate_id: &str,
        record: &str,
    ) -> Result<String, ChaincodeError> {
        let user_id = self
            .index
            .append(store, &self.user_index, candidate_id, false)?;

        let row = Row::new(vec![
            ColumnValue::from(user_id.as_str()),
            ColumnValue::Bytes(record.as_bytes().to_vec()),
        ]);
        store.upsert_row(&self.table, row)?;

        info!(user_id = %user_id, "user record stored");
        Ok(user_id)
    }

    fn get_user<S: TableStore>(&self, store: &S, user_id: &str) -> Result<Vec<u8>, ChaincodeError> {
        self.lookup(store, user_id)?.ok_or_else(|| ChaincodeError::NotFound {
            entity: "user",
            key: user_id.to_string(),
        })
    }

    fn authenticate<S: TableStore>(
        &self,
        store: &S,
        user_id: &str,
        _password: &str,
    ) -> AuthenticateResponse {
        let record = match self.lookup(store, user_id) {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!(user_id, "authentication denied: unknown user");
                return AuthenticateResponse::denied();
            }
            Err(e) => {
                warn!(user_id, error = %e, "authentication denied: lookup failed");
                return AuthenticateResponse::denied();
            }
        };

        match serde_json::from_slice::<User>(&record) {
            Ok(user) => {
                debug!(user_id, "authentication granted");
                AuthenticateResponse::granted(user)
            }
            Err(e) => {
                warn!(user_id, error = %e, "authentication denied: unreadable record");
                AuthenticateResponse::denied()
            }
        }
    }
}
