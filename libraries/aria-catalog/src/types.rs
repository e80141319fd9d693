//! Raw Jamendo wire types and their one-time conversion into [`Track`]
//!
//! Conversion happens here and nowhere else; the rest of the workspace only
//! ever sees the normalized record.

use crate::error::{CatalogError, Result};
use aria_core::{Album, Artist, Track, TrackSource};
use serde::Deserialize;

/// Image CDN the provider serves cover art from
const IMAGE_CDN: &str = "https://usercontent.jamendo.com";

/// Response envelope wrapping every Jamendo API reply
#[derive(Debug, Deserialize)]
pub struct JamendoEnvelope<T> {
    /// Status headers; `code` 0 means success
    pub headers: JamendoHeaders,

    /// Result rows
    #[serde(default)]
    pub results: Vec<T>,
}

/// Status block of a Jamendo reply
#[derive(Debug, Deserialize)]
pub struct JamendoHeaders {
    /// API status code (0 = success)
    pub code: i64,

    /// Error detail when `code` is non-zero
    #[serde(default)]
    pub error_message: Option<String>,
}

impl<T> JamendoEnvelope<T> {
    /// Reject replies whose envelope reports an API-level error
    pub fn into_results(self) -> Result<Vec<T>> {
        if self.headers.code != 0 {
            return Err(CatalogError::Api {
                code: self.headers.code,
                message: self
                    .headers
                    .error_message
                    .unwrap_or_else(|| "unknown API error".to_string()),
            });
        }
        Ok(self.results)
    }
}

/// A track row as the provider serializes it
#[derive(Debug, Default, Deserialize)]
pub struct JamendoTrack {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub duration: u32,

    /// Streaming URL (primary rendition)
    #[serde(default)]
    pub audio: String,

    /// Download URL (alternate rendition)
    #[serde(default)]
    pub audiodownload: String,

    #[serde(default)]
    pub audiodownload_allowed: bool,

    #[serde(default)]
    pub artist_id: String,

    #[serde(default)]
    pub artist_name: String,

    #[serde(default)]
    pub album_id: String,

    #[serde(default)]
    pub album_name: String,

    #[serde(default)]
    pub album_image: String,
}

impl JamendoTrack {
    /// Convert into the normalized track record
    ///
    /// Tracks the provider serves without a playable `audio` URL are
    /// rejected rather than silently produced unplayable.
    pub fn into_track(self, image_size: &str) -> Result<Track> {
        let artist_image = artist_image_url(&self.artist_id, image_size);

        let artist = Artist {
            id: self.artist_id.clone(),
            name: self.artist_name,
            image_url: Some(artist_image.clone()),
        };

        // Tracks without an album are presented as singles, falling back
        // to the artist image for cover art
        let album = if self.album_id.is_empty() {
            Album::new("Single", artist_image)
        } else {
            let image = if self.album_image.is_empty() {
                album_image_url(&self.album_id, &self.id, image_size)
            } else {
                self.album_image
            };
            let title = if self.album_name.is_empty() {
                "Single".to_string()
            } else {
                self.album_name
            };
            Album::new(title, image)
        };

        let mut track = Track::new(
            self.id.clone(),
            self.name,
            artist,
            album,
            self.duration,
            self.audio,
            TrackSource::Catalog {
                provider_id: self.id,
            },
        )
        .map_err(|e| CatalogError::Parse(e.to_string()))?;

        if self.audiodownload_allowed && !self.audiodownload.is_empty() {
            track = track.with_download_url(self.audiodownload);
        }
        Ok(track)
    }
}

fn artist_image_url(artist_id: &str, width: &str) -> String {
    format!("{IMAGE_CDN}?type=artist&id={artist_id}&width={width}")
}

fn album_image_url(album_id: &str, track_id: &str, width: &str) -> String {
    format!("{IMAGE_CDN}?type=album&id={album_id}&width={width}&trackid={track_id}")
}
