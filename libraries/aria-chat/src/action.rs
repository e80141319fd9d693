//! Resolution of chat actions into playable track records.
//!
//! The assistant names tracks by id and title; turning that into a playable
//! [`Track`] is best-effort. Resolution tries a bounded cache of recently
//! seen tracks first, then a catalog lookup, and finally degrades to an
//! explicitly-flagged placeholder rather than failing the whole chat action.

use aria_catalog::{CatalogError, CatalogProvider};
use aria_core::Track;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of resolving a play action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The named track was found in the cache or the catalog
    Exact(Track),

    /// The track could not be resolved; playback will be a silent
    /// placeholder and the UI should say so
    Placeholder(Track),
}

impl Resolution {
    /// The resolved track, however it was obtained
    pub fn into_track(self) -> Track {
        match self {
            Resolution::Exact(track) | Resolution::Placeholder(track) => track,
        }
    }

    /// Whether resolution was lossy
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Resolution::Placeholder(_))
    }
}

/// Resolves assistant-named tracks into track records
///
/// The shell feeds every track list it renders (search results, trending,
/// new releases) into [`ActionResolver::observe_tracks`]; those are the
/// tracks the assistant is most likely talking about, and resolving against
/// them avoids a catalog round trip.
pub struct ActionResolver {
    provider: Arc<dyn CatalogProvider>,

    /// Recently seen tracks, most recent first, deduplicated by id
    recent: VecDeque<Track>,

    /// Cache capacity
    capacity: usize,
}

impl ActionResolver {
    /// Default number of recently seen tracks retained
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Create a resolver over a catalog provider
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self::with_capacity(provider, Self::DEFAULT_CAPACITY)
    }

    /// Create a resolver with an explicit cache capacity
    pub fn with_capacity(provider: Arc<dyn CatalogProvider>, capacity: usize) -> Self {
        Self {
            provider,
            recent: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record tracks the user has recently seen on screen
    pub fn observe_tracks(&mut self, tracks: &[Track]) {
        for track in tracks {
            self.recent.retain(|t| t.id != track.id);
            if self.recent.len() >= self.capacity {
                self.recent.pop_back();
            }
            self.recent.push_front(track.clone());
        }
    }

    /// Number of cached tracks
    pub fn cached_len(&self) -> usize {
        self.recent.len()
    }

    /// Resolve a `PlayTrack` action into a track record
    ///
    /// Never fails: an unresolvable id yields [`Resolution::Placeholder`],
    /// which callers must surface as lossy rather than treat as success.
    pub async fn resolve_play(&self, track_id: &str, title: &str) -> Resolution {
        if let Some(track) = self.recent.iter().find(|t| t.id == track_id) {
            debug!(track_id = %track_id, "resolved chat action from recent tracks");
            return Resolution::Exact(track.clone());
        }

        match self.provider.track_by_id(track_id).await {
            Ok(track) => Resolution::Exact(track),
            Err(CatalogError::NotFound(_)) => {
                warn!(track_id = %track_id, "chat action names an unknown track, degrading to placeholder");
                Resolution::Placeholder(Track::placeholder(track_id, title))
            }
            Err(error) => {
                warn!(track_id = %track_id, %error, "catalog lookup failed, degrading to placeholder");
                Resolution::Placeholder(Track::placeholder(track_id, title))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aria_catalog::Result as CatalogResult;
    use aria_core::{Album, Artist, TrackSource};
    use async_trait::async_trait;

    struct FakeProvider {
        known: Vec<Track>,
        fail: bool,
    }

    #[async_trait]
    impl CatalogProvider for FakeProvider {
        async fn search_tracks(&self, _query: &str) -> CatalogResult<Vec<Track>> {
            Ok(self.known.clone())
        }

        async fn trending_tracks(&self) -> CatalogResult<Vec<Track>> {
            Ok(self.known.clone())
        }

        async fn new_releases(&self) -> CatalogResult<Vec<Track>> {
            Ok(self.known.clone())
        }

        async fn track_by_id(&self, id: &str) -> CatalogResult<Track> {
            if self.fail {
                return Err(CatalogError::Parse("backend exploded".into()));
            }
            self.known
                .iter()
                .find(|t| t.id == id)
                .cloned()
                .ok_or_else(|| CatalogError::NotFound(id.to_string()))
        }
    }

    fn test_track(id: &str) -> Track {
        Track::new(
            id,
            format!("Track {id}"),
            Artist::new("a1", "Test Artist"),
            Album::new("Test Album", "https://img.example.com/a.jpg"),
            180,
            format!("https://audio.example.com/{id}.mp3"),
            TrackSource::Catalog {
                provider_id: id.to_string(),
            },
        )
        .unwrap()
    }

    fn resolver(known: Vec<Track>, fail: bool) -> ActionResolver {
        ActionResolver::new(Arc::new(FakeProvider { known, fail }))
    }

    #[tokio::test]
    async fn resolves_from_recent_tracks_without_lookup() {
        // Provider would fail; the cache must answer first
        let mut resolver = resolver(vec![], true);
        resolver.observe_tracks(&[test_track("1")]);

        let resolution = resolver.resolve_play("1", "Track 1").await;
        assert_eq!(resolution, Resolution::Exact(test_track("1")));
    }

    #[tokio::test]
    async fn falls_back_to_catalog_lookup() {
        let resolver = resolver(vec![test_track("2")], false);

        let resolution = resolver.resolve_play("2", "Track 2").await;
        assert!(!resolution.is_placeholder());
        assert_eq!(resolution.into_track().id, "2");
    }

    #[tokio::test]
    async fn unknown_track_degrades_to_flagged_placeholder() {
        let resolver = resolver(vec![], false);

        let resolution = resolver.resolve_play("404", "Imaginary Song").await;
        assert!(resolution.is_placeholder());

        let track = resolution.into_track();
        assert!(track.is_placeholder());
        assert_eq!(track.id, "404");
        assert_eq!(track.title, "Imaginary Song");
    }

    #[tokio::test]
    async fn provider_failure_degrades_to_placeholder() {
        let resolver = resolver(vec![], true);

        let resolution = resolver.resolve_play("5", "Track 5").await;
        assert!(resolution.is_placeholder());
    }

    #[test]
    fn cache_is_bounded_and_deduplicated() {
        let mut resolver = ActionResolver::with_capacity(
            Arc::new(FakeProvider {
                known: vec![],
                fail: false,
            }),
            2,
        );

        resolver.observe_tracks(&[test_track("1"), test_track("2"), test_track("3")]);
        assert_eq!(resolver.cached_len(), 2);

        // Re-observing an existing id moves it, never duplicates it
        resolver.observe_tracks(&[test_track("3")]);
        assert_eq!(resolver.cached_len(), 2);
    }
}
