//! Aria Player - Playback Engine
//!
//! Platform-agnostic playback controller for Aria Player.
//!
//! This crate provides:
//! - Playback state machine (idle, loading, playing, paused)
//! - Queue store (insertion-ordered, id-deduplicated, repeat restart)
//! - Bounded playback history backing "previous" navigation
//! - Shuffle selection (uniform, excluding the current track)
//! - Seek by percent and by fixed step, with clamping
//! - Volume normalization across caller conventions
//! - Stale play-resolution discard via load generations
//! - Bounded alternate-rendition recovery after media errors
//!
//! # Architecture
//!
//! `aria-playback` owns all playback decisions but never touches a real
//! audio device. Platforms implement [`MediaHandle`] over whatever produces
//! sound (an HTML audio element, a native output stream) and feed its
//! asynchronous outcomes back in as [`MediaEvent`]s. The player mutates its
//! state, queues [`PlayerEvent`]s, and publishes a [`PlaybackSnapshot`] the
//! UI re-renders from.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use aria_core::{Album, Artist, Track, TrackSource};
//! use aria_playback::{MediaEvent, MediaHandle, Player, PlayerConfig};
//!
//! // A handle over the platform's audio output
//! struct NullHandle;
//!
//! impl MediaHandle for NullHandle {
//!     fn set_source(&mut self, _url: &str) {}
//!     fn request_play(&mut self, _generation: u64) {}
//!     fn pause(&mut self) {}
//!     fn set_position(&mut self, _seconds: f64) {}
//!     fn set_volume(&mut self, _gain: f64) {}
//! }
//!
//! let mut player = Player::new(NullHandle, PlayerConfig::default());
//!
//! let track = Track::new(
//!     "t1",
//!     "My Song",
//!     Artist::new("a1", "Artist Name"),
//!     Album::new("Album Name", "https://img.example.com/cover.jpg"),
//!     180,
//!     "https://audio.example.com/t1.mp3",
//!     TrackSource::Catalog { provider_id: "t1".to_string() },
//! )
//! .unwrap();
//!
//! player.play_track(track);
//!
//! // The platform reports the play request's outcome asynchronously
//! player.handle_media_event(MediaEvent::PlayResolved {
//!     generation: 1,
//!     error: None,
//! });
//! assert!(player.snapshot().is_playing);
//! ```

pub mod error;
pub mod events;
pub mod history;
pub mod player;
pub mod queue;
pub mod session;
pub mod types;

pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use history::History;
pub use player::Player;
pub use queue::QueueStore;
pub use session::{MediaErrorKind, MediaEvent, MediaHandle, SessionAdapter};
pub use types::{PlaybackSnapshot, PlaybackState, PlayerConfig, VolumeLevel};
