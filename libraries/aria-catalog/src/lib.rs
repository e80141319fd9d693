//! Aria Player - Music Catalog
//!
//! Catalog access for Aria Player: the [`CatalogProvider`] trait the rest of
//! the workspace programs against, and [`JamendoClient`], its implementation
//! over the Jamendo v3.0 API.
//!
//! Raw provider rows are converted into [`aria_core::Track`] exactly once,
//! inside this crate; provenance is recorded in the track's `source` field
//! rather than re-inferred downstream. The client performs no retry or
//! caching; those belong to whoever owns the call site.

pub mod client;
pub mod error;
pub mod provider;
pub mod types;

pub use client::{JamendoClient, JamendoConfig};
pub use error::{CatalogError, Result};
pub use provider::CatalogProvider;
