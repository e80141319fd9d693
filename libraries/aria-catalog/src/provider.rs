//! Catalog provider abstraction
//!
//! Consumers take `Arc<dyn CatalogProvider>` rather than a concrete client,
//! so shells can swap backends and tests can inject fakes.

use crate::error::Result;
use aria_core::Track;
use async_trait::async_trait;

/// A music catalog that can be searched and browsed
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Full-text track search
    async fn search_tracks(&self, query: &str) -> Result<Vec<Track>>;

    /// Currently trending tracks
    async fn trending_tracks(&self) -> Result<Vec<Track>>;

    /// Recently released tracks
    async fn new_releases(&self) -> Result<Vec<Track>>;

    /// Look up a single track by its catalog id
    async fn track_by_id(&self, id: &str) -> Result<Track>;
}
