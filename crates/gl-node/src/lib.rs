//! # Guarantee Ledger Node
//!
//! Host runtime for the guarantee ledger chaincode. It plays the role of the
//! permissioned platform the chaincode was written for:
//!
//! 1. Load world state from the snapshot file (if configured)
//! 2. Provision the chaincode tables (idempotent)
//! 3. Execute invocation lines one at a time, rolling back failed invokes
//! 4. Write one result line per invocation
//! 5. Save world state back to the snapshot file
//!
//! ## Modules
//!
//! - `config` - `HostConfig` from environment variables
//! - `script` - Invocation and result line formats
//! - `host` - Serialized execution with per-invocation rollback
//! - `logging` - Tracing subscriber setup

pub mod config;
pub mod host;
pub mod logging;
pub mod script;

pub use config::HostConfig;
pub use host::{Host, RunSummary};
pub use script::{Invocation, Outcome};
