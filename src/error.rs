//! Error handling for archive retrieval and report generation.
//!
//! Parsing never fails: malformed tags and move text degrade to sentinel
//! values instead. Only network retrieval, report persistence and user
//! input validation produce errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP Error: {status} for URL: {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Processing interrupted: {reason}")]
    Interrupted { reason: String },
}

impl ExtractorError {
    /// Create an invalid input error for a named field
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// True for failures raised while talking to the archive API
    pub fn is_retrieval_failure(&self) -> bool {
        matches!(self, Self::Http(_) | Self::HttpStatus { .. })
    }
}

pub type Result<T> = std::result::Result<T, ExtractorError>;
