//! Error handling utilities
//!
//! Errors only arise at the edges of the access layer: loading configuration
//! and acquiring the active role. Permission checks themselves never fail.

pub mod error;

pub use error::*;
