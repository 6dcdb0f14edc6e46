//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidSocketAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool bounds invalid: pool_max must be at least 1 and not below pool_min")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Invalid suggestion setting {name}: {reason}")]
    InvalidSuggestionSetting { name: &'static str, reason: String },

    #[error("Invalid topic tag in {list}: {value:?}")]
    InvalidTopic { list: &'static str, value: String },
}

impl ValidationError {
    pub(crate) fn suggestion(name: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidSuggestionSetting {
            name,
            reason: reason.into(),
        }
    }
}
