//! Error types for costctl
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for costctl
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration / CLI Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    #[error("Invalid filter expression: {message}")]
    Expression { message: String },

    #[error("Refusing to {action} without --yes")]
    ConfirmationRequired { action: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Service Errors
    // ============================================================================
    #[error("Cost Explorer request failed: {0}")]
    Api(#[from] aws_sdk_costexplorer::Error),

    #[error("Failed to build request: {0}")]
    Build(#[from] aws_sdk_costexplorer::error::BuildError),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a filter expression error
    pub fn expression(message: impl Into<String>) -> Self {
        Self::Expression {
            message: message.into(),
        }
    }

    /// Create a confirmation-required error
    pub fn confirmation_required(action: impl Into<String>) -> Self {
        Self::ConfirmationRequired {
            action: action.into(),
        }
    }

    /// Check if this error is the service rejecting a stale or malformed
    /// continuation token
    pub fn is_invalid_token(&self) -> bool {
        matches!(
            self,
            Error::Api(aws_sdk_costexplorer::Error::InvalidNextTokenException(_))
        )
    }

    /// Check if this error is a service-side throttle
    pub fn is_throttling(&self) -> bool {
        matches!(
            self,
            Error::Api(aws_sdk_costexplorer::Error::LimitExceededException(_))
        )
    }
}

/// Result type alias for costctl
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
