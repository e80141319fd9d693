//! Core types for the playback engine

use aria_core::Track;
use serde::{Deserialize, Serialize};

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No track selected
    Idle,

    /// Track bound, play requested, awaiting session confirmation
    Loading,

    /// Audio is audible
    Playing,

    /// Track selected but not audible
    Paused,
}

/// Volume value at a call boundary
///
/// Consumers declare which convention they use; the player normalizes to
/// 0.0-1.0 internally and never infers the range from the value itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VolumeLevel {
    /// 0.0 to 1.0
    Normalized(f64),

    /// 0 to 100
    Percent(f64),
}

impl VolumeLevel {
    /// Convert to the canonical 0.0-1.0 range, clamping out-of-range input
    pub fn normalized(self) -> f64 {
        let value = match self {
            VolumeLevel::Normalized(v) => v,
            VolumeLevel::Percent(p) => p / 100.0,
        };
        value.clamp(0.0, 1.0)
    }
}

/// Externally-observable playback state at a point in time
///
/// Mutated only by the player; read-only to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Currently selected track, if any
    pub current_track: Option<Track>,

    /// Current state machine position
    pub state: PlaybackState,

    /// Whether audio is audible right now
    pub is_playing: bool,

    /// Playback position in seconds (0 <= position <= duration)
    pub position_secs: f64,

    /// Track duration in seconds (0 when unknown)
    pub duration_secs: f64,

    /// Volume, normalized 0.0-1.0
    pub volume: f64,

    /// Shuffle flag
    pub is_shuffling: bool,

    /// Repeat flag
    pub is_repeating: bool,
}

/// Configuration for the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Maximum history size (default: 50)
    pub history_size: usize,

    /// Initial volume, normalized (default: 0.7)
    pub volume: f64,

    /// Fixed-step seek size in seconds (default: 10)
    pub seek_step_secs: f64,

    /// Duration substituted when media metadata reports a non-finite or
    /// zero length, so consumers never divide by zero (default: 180)
    pub fallback_duration_secs: f64,

    /// How many alternate renditions to try before surfacing a terminal
    /// media error (default: 2)
    pub max_recovery_attempts: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            history_size: 50,
            volume: 0.7,
            seek_step_secs: 10.0,
            fallback_duration_secs: 180.0,
            max_recovery_attempts: 2,
        }
    }
}
