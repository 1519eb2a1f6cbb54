// ABOUTME: Error types for the deck-outline application
// ABOUTME: Parsing never fails; these cover the file, config and output boundary

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Path not found: {0:?}")]
    PathNotFoundError(PathBuf),

    #[error("Invalid input pattern: {0}")]
    PatternError(String),

    #[error("No markdown files found matching pattern: {0}")]
    NoInputFoundError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
}

impl From<glob::PatternError> for DeckError {
    fn from(err: glob::PatternError) -> Self {
        DeckError::PatternError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
