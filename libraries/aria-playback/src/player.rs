//! Playback controller - core orchestration
//!
//! Coordinates the queue store, history, and media session. Turns external
//! intents (play, toggle, next, previous, seek, volume, shuffle, repeat)
//! into session calls and store mutations, and publishes the resulting
//! snapshot.
//!
//! The controller runs single-threaded and event-driven: every intent runs
//! to completion, but play requests resolve asynchronously through
//! [`MediaEvent::PlayResolved`]. A resolution is only applied when its
//! generation matches the current load, so a `play_track(B)` issued while
//! `play_track(A)` is still resolving can never let A's late resolution
//! corrupt B's state.

use crate::error::{PlayerError, Result};
use crate::events::PlayerEvent;
use crate::history::History;
use crate::queue::QueueStore;
use crate::session::{MediaErrorKind, MediaEvent, MediaHandle, SessionAdapter};
use crate::types::{PlaybackSnapshot, PlaybackState, PlayerConfig, VolumeLevel};
use aria_core::Track;
use tracing::{debug, info, warn};

/// The playback state machine
pub struct Player<H: MediaHandle> {
    session: SessionAdapter<H>,
    queue: QueueStore,
    history: History,
    config: PlayerConfig,

    current_track: Option<Track>,
    state: PlaybackState,

    /// Position in seconds; last writer wins between user seeks and
    /// handle time updates
    position: f64,

    /// Catalog-reported duration until media metadata supersedes it
    duration: f64,

    volume: f64,
    is_shuffling: bool,
    is_repeating: bool,

    /// Target of an in-flight seek. While set, time updates are stale
    /// and ignored; the handle's `Seeked` event clears it.
    pending_seek: Option<f64>,

    /// Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl<H: MediaHandle> Player<H> {
    /// Create a player around a platform media handle
    pub fn new(handle: H, config: PlayerConfig) -> Self {
        let mut session = SessionAdapter::new(handle, config.max_recovery_attempts);
        let volume = session.set_volume(config.volume);

        Self {
            session,
            queue: QueueStore::new(),
            history: History::new(config.history_size),
            config,
            current_track: None,
            state: PlaybackState::Idle,
            position: 0.0,
            duration: 0.0,
            volume,
            is_shuffling: false,
            is_repeating: false,
            pending_seek: None,
            pending_events: Vec::new(),
        }
    }

    // ===== Intents =====

    /// Select and play a track
    ///
    /// Re-invoking with the currently selected track toggles play/pause
    /// instead of restarting it. Otherwise the current track (if any) is
    /// pushed to history and the new track starts from the beginning.
    pub fn play_track(&mut self, track: Track) {
        if let Some(current) = &self.current_track {
            if current.id == track.id {
                self.toggle_play();
                return;
            }
        }

        let previous_id = self.current_track.as_ref().map(|t| t.id.clone());
        if let Some(current) = self.current_track.take() {
            self.history.push(current);
        }
        self.start_track(track, previous_id);
    }

    /// Toggle between playing and paused. No-op when nothing is selected.
    pub fn toggle_play(&mut self) {
        if self.current_track.is_none() {
            return;
        }

        match self.state {
            PlaybackState::Playing | PlaybackState::Loading => {
                self.session.pause();
                self.set_state(PlaybackState::Paused);
            }
            PlaybackState::Paused => {
                self.session.play();
                self.set_state(PlaybackState::Loading);
            }
            PlaybackState::Idle => {}
        }
    }

    /// Seek to a percentage (0-100) of the track duration
    ///
    /// Returns the absolute position that was applied.
    pub fn seek_to_percent(&mut self, percent: f64) -> Result<f64> {
        if self.current_track.is_none() {
            return Err(PlayerError::NoTrackSelected);
        }

        let percent = percent.clamp(0.0, 100.0);
        let target = percent / 100.0 * self.duration;
        Ok(self.apply_seek(target))
    }

    /// Seek relative to the current position (negative = backward)
    ///
    /// Returns the absolute position that was applied.
    pub fn seek_relative(&mut self, delta_secs: f64) -> Result<f64> {
        if self.current_track.is_none() {
            return Err(PlayerError::NoTrackSelected);
        }
        Ok(self.apply_seek(self.position + delta_secs))
    }

    /// Fixed-step skip forward
    pub fn seek_forward(&mut self) -> Result<f64> {
        self.seek_relative(self.config.seek_step_secs)
    }

    /// Fixed-step skip backward
    pub fn seek_backward(&mut self) -> Result<f64> {
        self.seek_relative(-self.config.seek_step_secs)
    }

    /// Set volume. The caller declares its convention via [`VolumeLevel`];
    /// the normalized 0.0-1.0 value is applied and published.
    pub fn set_volume(&mut self, level: VolumeLevel) {
        self.volume = self.session.set_volume(level.normalized());
        self.pending_events.push(PlayerEvent::VolumeChanged {
            volume: self.volume,
        });
    }

    /// Flip the shuffle flag. Takes effect on the next advancement.
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
        self.pending_events.push(PlayerEvent::ShuffleChanged {
            enabled: self.is_shuffling,
        });
    }

    /// Flip the repeat flag. Takes effect on the next advancement or
    /// end-of-track.
    pub fn toggle_repeat(&mut self) {
        self.is_repeating = !self.is_repeating;
        self.pending_events.push(PlayerEvent::RepeatChanged {
            enabled: self.is_repeating,
        });
    }

    /// Advance to the next track
    ///
    /// The current track is pushed to history. Queue exhausted with repeat
    /// on restarts the queue from its original order; with repeat off the
    /// player settles into `Paused` keeping the last track visible.
    pub fn next(&mut self) {
        if let Some(current) = self.current_track.clone() {
            self.history.push(current);
        }
        let current_id = self.current_track.as_ref().map(|t| t.id.clone());

        if let Some(track) = self.queue.next_track(self.is_shuffling, current_id.as_deref()) {
            self.start_track(track, current_id);
            return;
        }

        if self.is_repeating {
            self.queue.reload_original();
            if let Some(track) = self.queue.next_track(false, None) {
                self.start_track(track, current_id);
                return;
            }
        }

        self.settle_stopped();
    }

    /// Retreat to the most recently played track
    ///
    /// The current track goes back to the front of the queue so forward
    /// navigation finds it again; the restored track starts from the
    /// beginning. No-op when history is empty.
    pub fn previous(&mut self) {
        let Some(previous) = self.history.pop() else {
            return;
        };

        let current_id = self.current_track.as_ref().map(|t| t.id.clone());
        if let Some(current) = self.current_track.take() {
            self.queue.enqueue_front(current);
        }
        self.start_track(previous, current_id);
    }

    // ===== Queue surface =====

    /// Append a track to the queue (deduplicated by id)
    pub fn enqueue(&mut self, track: Track) {
        self.queue.enqueue(track);
        self.emit_queue_changed();
    }

    /// Remove a track from the queue by id
    pub fn remove_from_queue(&mut self, track_id: &str) -> Option<Track> {
        let removed = self.queue.remove(track_id);
        if removed.is_some() {
            self.emit_queue_changed();
        }
        removed
    }

    /// Queued tracks in play order
    pub fn queue(&self) -> &[Track] {
        self.queue.tracks()
    }

    /// Played tracks, oldest first
    pub fn history(&self) -> impl Iterator<Item = &Track> {
        self.history.tracks()
    }

    // ===== Media events =====

    /// Feed an event from the media handle into the state machine
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::PlayResolved { generation, error } => {
                self.on_play_resolved(generation, error);
            }
            MediaEvent::TimeUpdate { position } => {
                if self.current_track.is_none() {
                    return;
                }
                // A stale report arriving after a user seek must not win
                if self.pending_seek.is_some() {
                    return;
                }
                self.position = self.clamp_position(position);
            }
            MediaEvent::DurationKnown { duration } => {
                self.duration = self
                    .session
                    .duration_known(duration, self.config.fallback_duration_secs);
                self.position = self.clamp_position(self.position);
            }
            MediaEvent::Seeked { position } => {
                self.pending_seek = None;
                self.position = self.clamp_position(position);
            }
            MediaEvent::Ended => self.on_ended(),
            MediaEvent::Error { kind } => self.recover_or_fail(kind),
        }
    }

    // ===== State queries =====

    /// Current externally-observable state
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            current_track: self.current_track.clone(),
            state: self.state,
            is_playing: self.state == PlaybackState::Playing,
            position_secs: self.position,
            duration_secs: self.duration,
            volume: self.volume,
            is_shuffling: self.is_shuffling,
            is_repeating: self.is_repeating,
        }
    }

    /// Currently selected track
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// Current state machine position
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Drain all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are undrained events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    /// Bind and start a track without touching history; callers manage
    /// history according to the direction of travel.
    fn start_track(&mut self, track: Track, previous_track_id: Option<String>) {
        // Membership first, then removal: the selected track leaves the
        // upcoming queue once it starts, but stays in the original order
        // for repeat restarts.
        self.queue.enqueue(track.clone());
        self.queue.remove(&track.id);

        debug!(track_id = %track.id, title = %track.title, "starting track");

        self.session.load(&track);
        self.session.play();

        self.position = 0.0;
        self.pending_seek = None;
        self.duration = f64::from(track.duration_secs);

        self.pending_events.push(PlayerEvent::TrackChanged {
            track_id: track.id.clone(),
            previous_track_id,
        });
        self.current_track = Some(track);
        self.set_state(PlaybackState::Loading);
        self.emit_queue_changed();
    }

    fn on_play_resolved(&mut self, generation: u64, error: Option<MediaErrorKind>) {
        if generation != self.session.generation() {
            debug!(
                resolved = generation,
                current = self.session.generation(),
                "discarding stale play resolution"
            );
            return;
        }
        // A pause issued while the request was in flight already moved on
        if self.state != PlaybackState::Loading {
            return;
        }

        match error {
            None => self.set_state(PlaybackState::Playing),
            Some(kind) => self.recover_or_fail(kind),
        }
    }

    fn on_ended(&mut self) {
        let Some(track_id) = self.current_track.as_ref().map(|t| t.id.clone()) else {
            return;
        };

        if self.is_repeating {
            self.session.seek(0.0);
            self.position = 0.0;
            self.pending_seek = None;
            self.session.play();
            self.set_state(PlaybackState::Loading);
            return;
        }

        self.pending_events
            .push(PlayerEvent::TrackFinished { track_id });
        self.next();
    }

    /// Bounded recovery: bind the alternate rendition of the same logical
    /// track, or surface a terminal error. Autoplay rejections are never
    /// retried; they require a fresh user-initiated toggle.
    fn recover_or_fail(&mut self, kind: MediaErrorKind) {
        if kind == MediaErrorKind::AutoplayBlocked {
            info!("play request blocked by host policy; staying paused");
            self.session.pause();
            self.set_state(PlaybackState::Paused);
            return;
        }

        if self.session.try_alternate() {
            self.set_state(PlaybackState::Loading);
            return;
        }

        let track_id = self.current_track.as_ref().map(|t| t.id.clone());
        let error = PlayerError::Media {
            kind,
            message: "no further renditions available".into(),
        };
        warn!(%error, track_id = ?track_id, "media recovery exhausted");

        self.session.pause();
        self.set_state(PlaybackState::Paused);
        self.pending_events
            .push(PlayerEvent::PlaybackError { kind, track_id });
    }

    fn apply_seek(&mut self, target: f64) -> f64 {
        let mut target = target.max(0.0);
        if self.duration > 0.0 {
            target = target.min(self.duration);
        }
        let applied = self.session.seek(target);
        // Optimistic update; stale time reports are ignored until the
        // handle confirms the seek
        self.position = applied;
        self.pending_seek = Some(applied);
        applied
    }

    fn clamp_position(&self, position: f64) -> f64 {
        let position = position.max(0.0);
        if self.duration > 0.0 {
            position.min(self.duration)
        } else {
            position
        }
    }

    fn settle_stopped(&mut self) {
        self.session.pause();
        let state = if self.current_track.is_some() {
            PlaybackState::Paused
        } else {
            PlaybackState::Idle
        };
        self.set_state(state);
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.pending_events
                .push(PlayerEvent::StateChanged { state });
        }
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
    }
}
