//! Shared error types for the outer layers (loading, configuration, reports).
//!
//! The ROI engine itself is total and never produces these.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for roimap I/O operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Portfolio document could not be parsed
    #[error("Failed to parse {format} portfolio: {message}")]
    Portfolio { format: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No project with the requested id
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// No indicator with the requested id
    #[error("Indicator not found: {0}")]
    IndicatorNotFound(String),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Create a portfolio parse error for the given format
    pub fn portfolio(format: impl Into<String>, message: impl ToString) -> Self {
        Self::Portfolio {
            format: format.into(),
            message: message.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
