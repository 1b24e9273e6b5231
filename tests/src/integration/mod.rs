//! # Integration Flows
//!
//! - `flows` - Request to document lifecycle through the dispatcher
//! - `host` - The same lifecycle as an invocation script through the host

pub mod flows;
pub mod host;
