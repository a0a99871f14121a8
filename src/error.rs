//! Error types for cardbox

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the cardbox application
#[derive(Debug, Error)]
pub enum CardboxError {
    #[error("Card with term \"{0}\" not found")]
    CardNotFound(String),

    #[error("Cannot draw cards from an empty deck")]
    EmptyDeck,

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deck format error: {0}")]
    DeckFormat(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CardboxError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CardboxError::CardNotFound(_) => 2,
            CardboxError::EmptyDeck => 3,
            CardboxError::FileNotFound(_) => 4,
            CardboxError::Config(_) => 5,
            _ => 1,
        }
    }
}

/// Result type using CardboxError
pub type Result<T> = std::result::Result<T, CardboxError>;
