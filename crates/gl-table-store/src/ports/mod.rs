//! # Ports Layer
//!
//! The table store contract. The chaincode depends only on this trait; the
//! host decides which backend implements it.

pub mod store;

pub use store::*;
