//! # Guarantee Ledger Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks (submit, list, approve)
//! └── src/integration/  # End-to-end flows through the dispatcher and host
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gl-tests
//! cargo test -p gl-tests integration::flows
//! cargo bench -p gl-tests
//! ```

#![allow(dead_code)]

pub mod integration;
