//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.
//!
//! The validation is organized into several submodules:
//! - `trait_def`: Core Validate trait definition
//! - `access_validators`: Acquisition and logging settings
//! - `module_validators`: Module definitions
//! - `role_validators`: Role definitions and their grants
//! - `tests`: Test suite for all validators

mod access_validators;
mod module_validators;
mod role_validators;
mod trait_def;

pub use role_validators::validate_grants_against_modules;
pub use trait_def::Validate;
