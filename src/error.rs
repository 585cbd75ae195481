//! Error types for model-registry
//!
//! Missing configuration is recovered locally (fallback base URL, default
//! model). Everything here is a failure that reaches the caller.

use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file {path}: {source}")]
    ConfigFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config file {path}: {reason}")]
    ConfigValidationFailed { path: String, reason: String },

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build client for {model}: {reason}")]
    ClientBuild { model: String, reason: String },

    #[error("Request to {endpoint} timed out after {timeout_seconds} seconds")]
    EndpointTimeout {
        endpoint: String,
        timeout_seconds: u64,
    },

    #[error("Failed to query model at {endpoint}: {reason}")]
    ModelQueryFailed { endpoint: String, reason: String },

    #[error("Model {model} returned no choices")]
    EmptyResponse { model: String },
}

/// Convenience type alias for Results
pub type AppResult<T> = Result<T, AppError>;
