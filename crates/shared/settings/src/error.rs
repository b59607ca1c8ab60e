//! Configuration errors.
//!
//! Every variant is fatal at process start: a process must not run with
//! incomplete or malformed settings.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is absent
    #[error("missing configuration: environment variable {key} is not set")]
    Missing { key: String },

    /// A value is present but cannot be cast to its declared type
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    /// An explicitly requested env file could not be read or parsed
    #[error("failed to read env file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[cfg(feature = "database")]
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl ConfigError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Missing { .. } => "MISSING_CONFIGURATION",
            ConfigError::InvalidValue { .. } => "INVALID_CONFIGURATION_VALUE",
            ConfigError::EnvFile { .. } => "ENV_FILE_ERROR",
            #[cfg(feature = "database")]
            ConfigError::Database(_) => "DATABASE_ERROR",
        }
    }

    /// The env key this error is about, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::Missing { key } | ConfigError::InvalidValue { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// Convenience constructors
impl ConfigError {
    pub fn missing(key: impl Into<String>) -> Self {
        ConfigError::Missing { key: key.into() }
    }

    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;
