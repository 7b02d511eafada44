//! Command implementations for the CLI
//!
//! - start: Start the frame server
//! - test: Test configuration validity
//! - config: Configuration display and validation
//! - probe: One-shot upstream diagnostic

pub mod config;
pub mod probe;
pub mod start;
