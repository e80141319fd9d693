//! Normalized track record and its component types
//!
//! These shapes are what the playback engine consumes. Conversion from raw
//! provider responses happens exactly once, in the catalog client; nothing
//! downstream re-infers provenance from the id string.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Artist reference attached to a track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Provider-stable artist identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Artist image (optional)
    pub image_url: Option<String>,
}

impl Artist {
    /// Create an artist reference without an image
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: None,
        }
    }
}

/// Album reference attached to a track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Album title ("Single" when the provider reports none)
    pub title: String,

    /// Cover art URL
    pub image_url: String,
}

impl Album {
    /// Create an album reference
    pub fn new(title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image_url: image_url.into(),
        }
    }
}

/// Where a track record came from
///
/// Resolved once at construction time so that playback-url decisions never
/// fall back to sniffing the id string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrackSource {
    /// Track from the external catalog provider
    Catalog {
        /// Provider-side identifier (matches `Track::id` for catalog tracks)
        provider_id: String,
    },

    /// Bundled demo/placeholder audio
    Demo {
        /// Key into the bundled sample set
        sample_key: String,
    },
}

/// A single playable audio item with catalog metadata
///
/// Immutable once constructed. `id` uniquely identifies a track within a
/// session's queue and history; two records with the same id are the same
/// logical track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Stable catalog identifier
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist reference
    pub artist: Artist,

    /// Album reference
    pub album: Album,

    /// Authoritative length reported by the catalog, in seconds.
    /// May be superseded once actual media metadata loads.
    pub duration_secs: u32,

    /// Primary playable resource
    pub stream_url: String,

    /// Alternate rendition of the same logical track, used for
    /// media-error recovery
    pub download_url: Option<String>,

    /// Provenance, resolved at construction time
    pub source: TrackSource,
}

/// Sample key used for placeholder tracks produced by lossy resolution
pub const PLACEHOLDER_SAMPLE_KEY: &str = "silence";

impl Track {
    /// Create a track, validating the fields playback depends on
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: Artist,
        album: Album,
        duration_secs: u32,
        stream_url: impl Into<String>,
        source: TrackSource,
    ) -> Result<Self> {
        let id = id.into();
        let stream_url = stream_url.into();

        if id.is_empty() {
            return Err(CoreError::InvalidTrack("empty id".into()));
        }
        if stream_url.is_empty() {
            return Err(CoreError::InvalidTrack(format!(
                "track {id} has no stream url"
            )));
        }

        Ok(Self {
            id,
            title: title.into(),
            artist,
            album,
            duration_secs,
            stream_url,
            download_url: None,
            source,
        })
    }

    /// Attach an alternate rendition URL
    pub fn with_download_url(mut self, url: impl Into<String>) -> Self {
        self.download_url = Some(url.into());
        self
    }

    /// Construct the explicitly-lossy placeholder used when a chat action
    /// names a track the catalog cannot resolve
    pub fn placeholder(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: Artist::new("unknown", "Unknown Artist"),
            album: Album::new("Unknown", String::new()),
            duration_secs: 0,
            stream_url: format!("aria://demo/{PLACEHOLDER_SAMPLE_KEY}"),
            download_url: None,
            source: TrackSource::Demo {
                sample_key: PLACEHOLDER_SAMPLE_KEY.to_string(),
            },
        }
    }

    /// Whether this record is a placeholder rather than real catalog content
    pub fn is_placeholder(&self) -> bool {
        matches!(self.source, TrackSource::Demo { .. })
    }
}
