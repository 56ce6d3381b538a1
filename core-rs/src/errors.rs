//! Error types for GX Core

use thiserror::Error;

/// Message carried by [`GxError::InvalidArgument`] when a person is built from a blank name.
pub const EMPTY_FULL_NAME: &str = "fullName cannot be an empty string";

#[derive(Error, Debug)]
pub enum GxError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GxError {
    /// The error raised for an empty or whitespace-only full name
    pub fn empty_full_name() -> Self {
        GxError::InvalidArgument(EMPTY_FULL_NAME.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GxError>;
