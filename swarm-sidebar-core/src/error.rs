//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The pool data source answered with something unusable
    #[error("Pool source error: {0}")]
    PoolSource(String),

    /// network error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Route string that does not map to any page
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    /// Configuration error
    #[error("Config error: {0}")]
    ConfigError(String),
}

impl CoreError {
    /// Whether it is expected behavior (backend unreachable, stale route, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NetworkError(_) | Self::PoolSource(_) | Self::InvalidRoute(_) => true,
            Self::SerializationError(_) | Self::StorageError(_) | Self::ConfigError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
