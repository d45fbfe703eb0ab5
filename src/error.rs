//! Error handling for the resume parser

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeParserError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document could not be opened or parsed at all. Fatal for that
    /// document only; siblings in a batch are unaffected.
    #[error("Unreadable document: {0}")]
    UnreadableDocument(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeParserError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeParserError {
    fn from(err: anyhow::Error) -> Self {
        ResumeParserError::InvalidInput(err.to_string())
    }
}
