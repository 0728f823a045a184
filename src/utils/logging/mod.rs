//! Logging utilities
//!
//! This module installs the process-wide `tracing` subscriber.

pub mod logging;

pub use logging::LoggingUtils;
