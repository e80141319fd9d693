//! Media session adapter
//!
//! Wraps the single underlying playable media handle, ensuring at most one
//! track is ever live. Platforms implement [`MediaHandle`] over whatever
//! actually produces sound (an HTML audio element, a native output stream)
//! and feed the handle's asynchronous outcomes back in as [`MediaEvent`]s.
//!
//! Play requests resolve asynchronously. Each `load` bumps a generation
//! counter and resolutions carry the generation of the request that spawned
//! them, so a stale resolution from a superseded track can be recognized and
//! discarded. Starting a new `load` is the only cancellation mechanism.

use aria_core::Track;
use serde::{Deserialize, Serialize};

/// Classes of media failure surfaced by the handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaErrorKind {
    /// Resource unreachable or unsupported format
    Load,

    /// Play request rejected by host autoplay policy.
    /// Never retried automatically; requires a fresh user-initiated toggle.
    AutoplayBlocked,

    /// Unsupported codec or corrupt stream
    Decode,

    /// Mid-playback stall or network failure
    Network,
}

/// Events flowing from the media handle back to the player
///
/// Ordering of `PlayResolved` relative to other events is not guaranteed;
/// the player must check the generation before applying it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaEvent {
    /// A play request resolved. `generation` echoes the value passed to
    /// [`MediaHandle::request_play`].
    PlayResolved {
        /// Generation of the load this resolution belongs to
        generation: u64,
        /// `None` on success, or the rejection kind
        error: Option<MediaErrorKind>,
    },

    /// Periodic position report
    TimeUpdate {
        /// Current position in seconds
        position: f64,
    },

    /// Media metadata loaded; duration is now authoritative
    DurationKnown {
        /// Reported duration in seconds (may be non-finite)
        duration: f64,
    },

    /// A seek request completed
    Seeked {
        /// Position after the seek, in seconds
        position: f64,
    },

    /// Track played to its end
    Ended,

    /// Playback failed
    Error {
        /// What class of failure occurred
        kind: MediaErrorKind,
    },
}

/// The one underlying playable media handle
///
/// Implementations own the platform resource. All calls are fire-and-forget
/// from the adapter's perspective; position, duration, termination, and play
/// resolution arrive back as [`MediaEvent`]s.
pub trait MediaHandle {
    /// Bind the handle's source to a new URL, resetting playback position
    fn set_source(&mut self, url: &str);

    /// Request playback resume. The eventual outcome must be reported as
    /// [`MediaEvent::PlayResolved`] echoing `generation`.
    fn request_play(&mut self, generation: u64);

    /// Pause immediately. Always succeeds synchronously.
    fn pause(&mut self);

    /// Set playback position in seconds (already clamped by the adapter)
    fn set_position(&mut self, seconds: f64);

    /// Set volume gain (already clamped to 0.0-1.0 by the adapter)
    fn set_volume(&mut self, gain: f64);
}

/// Adapter owning the media handle plus the session bookkeeping the player
/// relies on: load generations, duration authority, clamping, and bounded
/// alternate-rendition recovery.
pub struct SessionAdapter<H: MediaHandle> {
    handle: H,

    /// Bumped on every source bind; stale play resolutions carry older values
    generation: u64,

    /// Authoritative duration once media metadata has loaded
    duration: Option<f64>,

    /// Renditions of the current logical track, primary first
    renditions: Vec<String>,

    /// Index into `renditions` currently bound
    rendition_index: usize,

    /// Substitutions performed for the current track
    recovery_attempts: u32,

    /// Recovery budget per track
    max_recovery_attempts: u32,
}

impl<H: MediaHandle> SessionAdapter<H> {
    /// Create an adapter around a platform handle
    pub fn new(handle: H, max_recovery_attempts: u32) -> Self {
        Self {
            handle,
            generation: 0,
            duration: None,
            renditions: Vec::new(),
            rendition_index: 0,
            recovery_attempts: 0,
            max_recovery_attempts,
        }
    }

    /// Bind the handle to a track's primary rendition
    ///
    /// Bumps the generation, which invalidates any in-flight play resolution
    /// from a previous load. Returns the new generation.
    pub fn load(&mut self, track: &Track) -> u64 {
        self.generation += 1;
        self.duration = None;
        self.recovery_attempts = 0;
        self.rendition_index = 0;

        self.renditions.clear();
        self.renditions.push(track.stream_url.clone());
        if let Some(url) = &track.download_url {
            self.renditions.push(url.clone());
        }

        self.handle.set_source(&track.stream_url);
        self.handle.set_position(0.0);
        self.generation
    }

    /// Request playback resume for the currently bound source
    ///
    /// Returns the generation the eventual resolution will carry.
    pub fn play(&mut self) -> u64 {
        self.handle.request_play(self.generation);
        self.generation
    }

    /// Pause playback
    pub fn pause(&mut self) {
        self.handle.pause();
    }

    /// Seek to a position, clamped to `[0, duration]` (or `[0, inf)` while
    /// duration is unknown). Returns the clamped target.
    pub fn seek(&mut self, seconds: f64) -> f64 {
        let mut target = seconds.max(0.0);
        if let Some(duration) = self.duration {
            target = target.min(duration);
        }
        self.handle.set_position(target);
        target
    }

    /// Apply a volume gain, clamped to `[0, 1]`. Returns the clamped value.
    pub fn set_volume(&mut self, gain: f64) -> f64 {
        let gain = gain.clamp(0.0, 1.0);
        self.handle.set_volume(gain);
        gain
    }

    /// Record the duration reported by media metadata
    ///
    /// Non-finite or non-positive values are replaced with `fallback` so
    /// downstream progress math never divides by zero. Returns the value
    /// that became authoritative.
    pub fn duration_known(&mut self, reported: f64, fallback: f64) -> f64 {
        let duration = if reported.is_finite() && reported > 0.0 {
            reported
        } else {
            fallback
        };
        self.duration = Some(duration);
        duration
    }

    /// Authoritative duration, if media metadata has loaded
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Generation of the current load
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Attempt recovery by binding the next alternate rendition of the same
    /// logical track and re-requesting play.
    ///
    /// Returns `false` when no further rendition exists or the recovery
    /// budget is spent; the caller then surfaces a terminal error.
    pub fn try_alternate(&mut self) -> bool {
        if self.recovery_attempts >= self.max_recovery_attempts {
            return false;
        }
        let next_index = self.rendition_index + 1;
        let Some(url) = self.renditions.get(next_index).cloned() else {
            return false;
        };

        self.recovery_attempts += 1;
        self.rendition_index = next_index;
        // New bind supersedes the failed rendition's pending resolution.
        self.generation += 1;
        self.duration = None;

        tracing::warn!(
            rendition = next_index,
            attempt = self.recovery_attempts,
            "substituting alternate rendition after media error"
        );

        self.handle.set_source(&url);
        self.handle.set_position(0.0);
        self.handle.request_play(self.generation);
        true
    }
}
