//! Resume Kit core library
//!
//! This library backs the `rk` binary:
//! - Exit codes for CLI operations
//! - Structured logging setup
//! - The analysis session state machine
//! - The analysis backend seam and local plain-text backend
//! - Single-file exports and clipboard helpers
//!
//! The binary entry point is in `main.rs`.

pub mod backend;
pub mod clipboard;
pub mod exit_codes;
pub mod export;
pub mod logging;
pub mod session;
