//! Aria Player Core
//!
//! Domain types shared across the Aria Player crates.
//!
//! This crate defines the normalized track record consumed by the playback
//! engine, the catalog client, and the chat-action resolver. Track records
//! are immutable value objects: they are built once from a provider response
//! and never re-interpreted afterwards.
//!
//! # Example
//!
//! ```rust
//! use aria_core::{Album, Artist, Track, TrackSource};
//!
//! let track = Track::new(
//!     "1532771",
//!     "Midnight Drive",
//!     Artist::new("439311", "Nova Waves"),
//!     Album::new("Night Sessions", "https://images.example.com/album/1.jpg"),
//!     214,
//!     "https://audio.example.com/1532771.mp3",
//!     TrackSource::Catalog { provider_id: "1532771".into() },
//! )
//! .expect("valid track");
//!
//! assert_eq!(track.duration_secs, 214);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

pub use error::{CoreError, Result};
pub use types::{Album, Artist, Track, TrackSource};
