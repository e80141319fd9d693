//! Error types for the chat assistant client.

use thiserror::Error;

/// Errors that can occur when talking to the chat assistant backend.
#[derive(Error, Debug)]
pub enum ChatError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend returned an error response
    #[error("Chat backend error ({status}): {message}")]
    Backend {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Failed to parse a backend response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid backend base URL
    #[error("Invalid chat backend URL: {0}")]
    InvalidUrl(String),
}

/// Result type for chat operations.
pub type Result<T> = std::result::Result<T, ChatError>;
