//! Player events
//!
//! Event-based communication for UI synchronization. The player queues
//! events as it mutates state; consumers drain them periodically and
//! re-render from the snapshot.

use crate::session::MediaErrorKind;
use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};

/// Events emitted by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// The selected track changed
    TrackChanged {
        /// Id of the new current track
        track_id: String,
        /// Id of the previous track (if any)
        previous_track_id: Option<String>,
    },

    /// Playback state changed (playing, paused, loading, idle)
    StateChanged {
        /// The new state
        state: PlaybackState,
    },

    /// Track finished playing naturally (reached end)
    TrackFinished {
        /// Id of the finished track
        track_id: String,
    },

    /// Volume changed
    VolumeChanged {
        /// New normalized volume (0.0-1.0)
        volume: f64,
    },

    /// Queue contents changed
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Shuffle flag flipped
    ShuffleChanged {
        /// New flag value
        enabled: bool,
    },

    /// Repeat flag flipped
    RepeatChanged {
        /// New flag value
        enabled: bool,
    },

    /// Media playback failed after recovery attempts were exhausted
    PlaybackError {
        /// What class of media failure occurred
        kind: MediaErrorKind,
        /// Id of the affected track (if one was selected)
        track_id: Option<String>,
    },
}
