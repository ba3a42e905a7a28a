//! Error types for gridsift-sources

use gridsift::EngineError;
use thiserror::Error;

/// Errors that can occur when working with record sources
#[derive(Error, Debug, Clone)]
pub enum SourceError {
    /// The raw input could not be parsed into records
    #[error("Parse error: {0}")]
    Parse(String),

    /// An IO error occurred
    #[error("IO error: {0}")]
    Io(String),

    /// The engine refused a command
    #[error("Engine error: {0}")]
    Engine(String),

    /// A custom error occurred
    #[error("{0}")]
    Custom(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<EngineError> for SourceError {
    fn from(err: EngineError) -> Self {
        Self::Engine(err.to_string())
    }
}

/// Result type for source operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
