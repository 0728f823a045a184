//! Role acquisition and resolution configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Access layer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Upper bound on how long role acquisition may stay in flight
    #[serde(default = "default_acquisition_timeout_ms")]
    pub acquisition_timeout_ms: u64,
    /// What the store publishes when role acquisition fails
    #[serde(default)]
    pub failure_policy: AcquisitionFailurePolicy,
    /// Role applied at startup before any acquisition completes
    #[serde(default)]
    pub default_role: Option<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            acquisition_timeout_ms: default_acquisition_timeout_ms(),
            failure_policy: AcquisitionFailurePolicy::default(),
            default_role: None,
        }
    }
}

impl AccessConfig {
    /// Acquisition timeout as a [`Duration`]
    pub fn acquisition_timeout(&self) -> Duration {
        Duration::from_millis(self.acquisition_timeout_ms)
    }

    /// Merge access configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.acquisition_timeout_ms != default_acquisition_timeout_ms() {
            self.acquisition_timeout_ms = other.acquisition_timeout_ms;
        }
        if other.failure_policy != AcquisitionFailurePolicy::default() {
            self.failure_policy = other.failure_policy;
        }
        if other.default_role.is_some() {
            self.default_role = other.default_role;
        }
        self
    }
}

/// Outcome published when the role source fails or times out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcquisitionFailurePolicy {
    /// Keep gates pending and mark content as unavailable
    RemainPending,
    /// Resolve to an explicit, empty grant set
    #[default]
    Deny,
}

impl FromStr for AcquisitionFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remain_pending" | "pending" => Ok(Self::RemainPending),
            "deny" => Ok(Self::Deny),
            other => Err(format!("Unknown acquisition failure policy: {}", other)),
        }
    }
}
