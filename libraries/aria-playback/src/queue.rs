//! Queue store
//!
//! Decides "what plays next" independent of the media layer. The queue is an
//! insertion-ordered sequence of upcoming tracks, deduplicated by id; a copy
//! of the original insertion order is retained so repeat can restart the
//! queue after it drains.

use aria_core::Track;
use rand::seq::SliceRandom;

/// Ordered, id-deduplicated queue of upcoming tracks
#[derive(Debug, Clone, Default)]
pub struct QueueStore {
    /// Tracks still slated to play, in play order
    upcoming: Vec<Track>,

    /// Insertion order of everything ever enqueued (for repeat restart)
    original: Vec<Track>,
}

impl QueueStore {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a track unless one with the same id is already queued
    pub fn enqueue(&mut self, track: Track) {
        if !self.contains(&track.id) {
            if !self.original.iter().any(|t| t.id == track.id) {
                self.original.push(track.clone());
            }
            self.upcoming.push(track);
        }
    }

    /// Insert a track at the head of the queue unless already queued
    ///
    /// Used when retreating: the track playback moved away from goes back
    /// to the front so forward navigation finds it again.
    pub fn enqueue_front(&mut self, track: Track) {
        if !self.contains(&track.id) {
            if !self.original.iter().any(|t| t.id == track.id) {
                self.original.insert(0, track.clone());
            }
            self.upcoming.insert(0, track);
        }
    }

    /// Select the next track to play
    ///
    /// Ordered mode returns the queue head. Shuffle mode picks uniformly at
    /// random among queued tracks excluding `current_id`, re-randomizing on
    /// every call rather than memoizing an order. The selection is returned
    /// by clone; callers remove it via [`QueueStore::remove`] once it
    /// actually begins playing.
    pub fn next_track(&mut self, shuffling: bool, current_id: Option<&str>) -> Option<Track> {
        if self.upcoming.is_empty() {
            return None;
        }

        if shuffling {
            let candidates: Vec<&Track> = self
                .upcoming
                .iter()
                .filter(|t| current_id != Some(t.id.as_str()))
                .collect();

            let mut rng = rand::thread_rng();
            match candidates.choose(&mut rng) {
                Some(track) => Some((*track).clone()),
                // Only the currently playing track remains
                None => self.upcoming.first().cloned(),
            }
        } else {
            self.upcoming.first().cloned()
        }
    }

    /// Remove a track from the queue by id
    pub fn remove(&mut self, track_id: &str) -> Option<Track> {
        let index = self.upcoming.iter().position(|t| t.id == track_id)?;
        Some(self.upcoming.remove(index))
    }

    /// Restore the queue to its original insertion order
    ///
    /// Used when repeat is on and the queue has drained.
    pub fn reload_original(&mut self) {
        self.upcoming = self.original.clone();
    }

    /// Check whether a track id is currently queued
    pub fn contains(&self, track_id: &str) -> bool {
        self.upcoming.iter().any(|t| t.id == track_id)
    }

    /// Tracks in play order
    pub fn tracks(&self) -> &[Track] {
        &self.upcoming
    }

    /// Number of queued tracks
    pub fn len(&self) -> usize {
        self.upcoming.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty()
    }

    /// Drop all queued tracks and the remembered original order
    pub fn clear(&mut self) {
        self.upcoming.clear();
        self.original.clear();
    }
}
