//! Observability for the directory service
//!
//! Structured one-line JSON logging with explicit severities. Synchronous,
//! no buffering, no background threads. Logging never affects request
//! outcomes; errors are still surfaced to the caller in full.

mod logger;

pub use logger::{Logger, Severity};
