//! # Service Layer
//!
//! Ledger components. Each owns one table and reaches it only through the
//! store handed to it per call.

pub mod credentials;
pub mod documents;
pub mod index;
pub mod requests;

pub use credentials::CredentialStore;
pub use documents::DocumentLedger;
pub use index::SequentialIndex;
pub use requests::RequestLedger;
