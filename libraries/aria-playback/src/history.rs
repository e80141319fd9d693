//! Play history tracking
//!
//! Bounded stack of previously played tracks backing "previous" navigation.

use aria_core::Track;
use std::collections::VecDeque;

/// Play history with bounded size
///
/// Most-recently-played sits on top; when full, the oldest entry is
/// discarded.
#[derive(Debug, Clone)]
pub struct History {
    /// History buffer (most recent = back)
    tracks: VecDeque<Track>,

    /// Maximum history size
    max_size: usize,
}

impl History {
    /// Create new history with the given maximum size
    pub fn new(max_size: usize) -> Self {
        Self {
            tracks: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Push the track playback is moving away from
    pub fn push(&mut self, track: Track) {
        if self.tracks.len() >= self.max_size {
            self.tracks.pop_front();
        }
        self.tracks.push_back(track);
    }

    /// Pop the most recent entry
    pub fn pop(&mut self) -> Option<Track> {
        self.tracks.pop_back()
    }

    /// Most recent entry without removing it
    pub fn peek(&self) -> Option<&Track> {
        self.tracks.back()
    }

    /// All entries, oldest first
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if history is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.tracks.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(50)
    }
}
