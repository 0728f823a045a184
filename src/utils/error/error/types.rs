//! Error types for the access layer

use thiserror::Error;

/// Result type alias for the access layer
pub type Result<T> = std::result::Result<T, AccessError>;

/// Main error type for the access layer
#[derive(Error, Debug)]
pub enum AccessError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authorization errors
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// Role acquisition errors
    #[error("Role acquisition error: {0}")]
    Acquisition(String),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),
}

impl AccessError {
    /// Whether the error came from acquiring the role rather than from local state
    pub fn is_acquisition_failure(&self) -> bool {
        matches!(self, Self::Acquisition(_) | Self::Timeout(_))
    }
}
