//! Error types for the playback engine

use crate::session::MediaErrorKind;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// No track is currently selected
    #[error("No track selected")]
    NoTrackSelected,

    /// Media playback failed after exhausting alternate renditions
    #[error("Media error ({kind:?}): {message}")]
    Media {
        /// What class of media failure occurred
        kind: MediaErrorKind,
        /// Human-readable detail
        message: String,
    },
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlayerError>;
