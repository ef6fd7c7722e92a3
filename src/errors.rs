// ABOUTME: Error types for the slidemark application
// ABOUTME: Provides structured error handling for reading, rendering and configuration

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to fetch remote resource: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Invalid resource path: {0}")]
    InvalidResourcePath(String),

    #[error("Markdown rendering error: {0}")]
    RenderError(String),

    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("No presentations found matching pattern: {0}")]
    NoPresentationsFoundError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

impl From<anyhow::Error> for DeckError {
    fn from(err: anyhow::Error) -> Self {
        DeckError::UnknownError(err.to_string())
    }
}

impl From<glob::PatternError> for DeckError {
    fn from(err: glob::PatternError) -> Self {
        DeckError::ValidationError(format!("Invalid glob pattern: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
