//! Error types shared across the library.
//!
//! Every failure class from the adapter and file boundaries normalizes into
//! one variant here; nothing in the library panics on bad input.

use thiserror::Error;

/// Library-wide error type
#[derive(Debug, Error)]
pub enum ForgeError {
    /// Input validation failed before any request was made
    #[error("{0}")]
    InvalidInput(String),

    /// Filesystem failure while reading or writing a config snapshot
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in an imported snapshot or an AI payload
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Network or HTTP failure talking to the generative model
    #[error("AI request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The model answered, but not in the shape we asked for
    #[error("AI response error: {0}")]
    AiResponse(String),
}

/// Library-wide result alias
pub type Result<T> = std::result::Result<T, ForgeError>;
