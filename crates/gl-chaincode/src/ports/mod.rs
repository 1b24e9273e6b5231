//! # Ports Layer
//!
//! - **Driving Ports (Inbound)**: ledger APIs consumed by the dispatcher
//! - **Driven Ports (Outbound)**: table store and time source

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
