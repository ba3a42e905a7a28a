use std::{error::Error, fmt};

/// Error type specific to engine operations.
#[derive(Debug, Clone)]
pub enum EngineError {
    /// The engine task has stopped and no longer accepts commands.
    Closed,
    /// A custom error raised by a collaborator.
    Custom(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "Engine error: engine task has stopped"),
            Self::Custom(msg) => write!(f, "Engine error: {msg}"),
        }
    }
}

impl Error for EngineError {}
