//! Access and logging configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for AccessConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating access configuration");

        if self.acquisition_timeout_ms == 0 {
            return Err("Acquisition timeout must be greater than 0".to_string());
        }

        if self.acquisition_timeout_ms > 300_000 {
            return Err("Acquisition timeout should not exceed 5 minutes".to_string());
        }

        if let Some(role) = &self.default_role {
            if role.trim().is_empty() {
                return Err("Default role cannot be blank when set".to_string());
            }
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(filter) = &self.filter {
            if filter.trim().is_empty() {
                return Err("Log filter cannot be blank when set".to_string());
            }
        }

        Ok(())
    }
}
