//! Utility modules
//!
//! - **error**: Error types shared by configuration and role acquisition
//! - **logging**: `tracing` subscriber setup

pub mod error;
pub mod logging;

pub use error::{AccessError, Result};
pub use logging::LoggingUtils;
