//! ElizaSign — transaction guardian library.
//!
//! Exposes the decision engine, the transaction ledger and the simulation
//! session for integration testing and programmatic use. The binary
//! entrypoint is in `main.rs`.

// Many items are pub for use by the binary and integration tests,
// which are separate compilation units — suppress false dead_code warnings.
#![allow(dead_code)]

pub mod agent;
pub mod cli;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod session;
pub mod utils;

pub use error::EngineError;
