//! Bandtable CLI library.
//!
//! This crate provides the command implementations behind the `bandtable`
//! binary and the emitters that turn finished wavetables into C or Rust
//! source.

pub mod commands;
pub mod emit;
