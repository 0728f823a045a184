//! Configuration management for the access layer
//!
//! This module handles loading, validation, and management of the role table,
//! module definitions and acquisition settings.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AccessError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable holding the configuration file path
pub const CONFIG_PATH_ENV: &str = "ACCESS_GATE_CONFIG";
/// Overrides `access.acquisition_timeout_ms`
pub const ACQUISITION_TIMEOUT_ENV: &str = "ACCESS_GATE_ACQUISITION_TIMEOUT_MS";
/// Overrides `access.failure_policy`
pub const FAILURE_POLICY_ENV: &str = "ACCESS_GATE_FAILURE_POLICY";
/// Overrides `access.default_role`
pub const DEFAULT_ROLE_ENV: &str = "ACCESS_GATE_DEFAULT_ROLE";

/// Main configuration struct for the access layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Role acquisition configuration
    #[serde(default)]
    pub access: AccessConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Role table
    #[serde(default)]
    pub roles: RolesConfig,
    /// Module definitions
    #[serde(default)]
    pub modules: ModulesConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;

        let config = Self::from_yaml_str(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// `ACCESS_GATE_CONFIG` names a YAML file; without it the built-in role
    /// table is used. `ACCESS_GATE_ACQUISITION_TIMEOUT_MS`,
    /// `ACCESS_GATE_FAILURE_POLICY` and `ACCESS_GATE_DEFAULT_ROLE` override
    /// the corresponding access settings.
    pub async fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path).await?,
            Err(_) => Self::default(),
        };

        config.with_overrides(|name| env::var(name).ok())
    }

    /// Apply access overrides looked up by environment variable name
    ///
    /// The result is validated again, so an override naming an undefined
    /// default role is rejected.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(timeout) = lookup(ACQUISITION_TIMEOUT_ENV) {
            self.access.acquisition_timeout_ms = timeout.trim().parse().map_err(|e| {
                AccessError::Config(format!(
                    "Invalid {}='{}': {}",
                    ACQUISITION_TIMEOUT_ENV, timeout, e
                ))
            })?;
        }
        if let Some(policy) = lookup(FAILURE_POLICY_ENV) {
            self.access.failure_policy = policy
                .parse()
                .map_err(|e| AccessError::Config(format!("Invalid {}: {}", FAILURE_POLICY_ENV, e)))?;
        }
        if let Some(role) = lookup(DEFAULT_ROLE_ENV) {
            self.access.default_role = Some(role);
        }

        debug!("Applied environment overrides");
        self.validate()?;
        Ok(self)
    }

    /// Get access configuration
    pub fn access(&self) -> &AccessConfig {
        &self.access
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.access
            .validate()
            .map_err(|e| AccessError::Config(format!("Access config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| AccessError::Config(format!("Logging config error: {}", e)))?;

        self.modules
            .validate()
            .map_err(|e| AccessError::Config(format!("Module config error: {}", e)))?;

        self.roles
            .validate()
            .map_err(|e| AccessError::Config(format!("Role config error: {}", e)))?;

        let modules = self.modules.effective();
        let roles = self.roles.effective();
        validation::validate_grants_against_modules(&roles, &modules)
            .map_err(|e| AccessError::Config(format!("Role config error: {}", e)))?;

        if let Some(default_role) = &self.access.default_role {
            if !roles.iter().any(|r| &r.name == default_role) {
                return Err(AccessError::Config(format!(
                    "Default role '{}' is not defined",
                    default_role
                )));
            }
        }

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.access = self.access.merge(other.access);
        if other.logging.filter.is_some()
            || other.logging.level != LogLevel::default()
            || other.logging.format != LogFormat::default()
        {
            self.logging = other.logging;
        }
        if !other.roles.definitions.is_empty() || !other.roles.include_defaults {
            self.roles = other.roles;
        }
        if !other.modules.definitions.is_empty() || !other.modules.include_defaults {
            self.modules = other.modules;
        }
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
