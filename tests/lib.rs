//! Test suite for access-gate
//!
//! ## Test Categories
//!
//! ### 1. Common Utilities (`common/`)
//! Shared fixtures: stores built from the built-in table or from YAML.
//!
//! ### 2. Integration Tests (`integration/`)
//! End-to-end flows through the public API:
//! - Dashboard scenarios (role switches, gated buttons)
//! - Configuration files on disk
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all tests
//! cargo test
//!
//! # Run only unit tests
//! cargo test --lib
//!
//! # Run integration tests
//! cargo test --test lib
//! ```

pub mod common;
pub mod integration;
