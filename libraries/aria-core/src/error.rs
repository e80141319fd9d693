//! Error types for core domain objects

use thiserror::Error;

/// Errors raised while constructing domain types
#[derive(Debug, Error)]
pub enum CoreError {
    /// Track failed construction-time validation
    #[error("Invalid track: {0}")]
    InvalidTrack(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
