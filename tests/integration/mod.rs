//! Integration tests

pub mod config_file_tests;
pub mod dashboard_scenarios;
