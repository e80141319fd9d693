//! Error types for the catalog client.

use thiserror::Error;

/// Errors that can occur when querying a music catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog API returned an error envelope
    #[error("Catalog API error ({code}): {message}")]
    Api {
        /// API status code from the response envelope
        code: i64,
        /// API-supplied error message
        message: String,
    },

    /// No track matched the requested id
    #[error("Track not found: {0}")]
    NotFound(String),

    /// Failed to parse a catalog response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid catalog base URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
