//! # Adapters Layer
//!
//! - `dispatch` - Routes named operations from the host to the ledgers

pub mod dispatch;

pub use dispatch::{Chaincode, Channel, Payload, PayloadKind};
