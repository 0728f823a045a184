//! Configuration data models
//!
//! This module defines all configuration structures used by the access layer.

#![allow(missing_docs)]

pub mod access;
pub mod logging;
pub mod modules;
pub mod roles;

// Re-export all configuration types
pub use access::*;
pub use logging::*;
pub use modules::*;
pub use roles::*;

/// Default role acquisition timeout in milliseconds
pub fn default_acquisition_timeout_ms() -> u64 {
    10_000
}

pub(crate) fn default_true() -> bool {
    true
}
