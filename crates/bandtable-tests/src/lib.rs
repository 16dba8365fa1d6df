//! Bandtable End-to-End Test Infrastructure
//!
//! This crate holds integration tests that span the whole workspace:
//!
//! - Generation: config -> emitted C / Rust source
//! - Properties: partition and harmonic invariants over arbitrary configs
//! - **Determinism**: bit-identical tables across runs and thread counts
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p bandtable-tests
//!
//! # Include the rayon path
//! cargo test -p bandtable-tests --features parallel
//! ```

pub mod determinism;
