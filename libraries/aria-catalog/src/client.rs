//! Jamendo catalog client.

use crate::error::{CatalogError, Result};
use crate::provider::CatalogProvider;
use crate::types::{JamendoEnvelope, JamendoTrack};
use aria_core::Track;
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the Jamendo client.
#[derive(Debug, Clone)]
pub struct JamendoConfig {
    /// API base URL, e.g. `https://api.jamendo.com/v3.0`
    pub base_url: String,

    /// Application client id issued by the provider
    pub client_id: String,

    /// Cover art width requested from the image CDN
    pub image_size: String,

    /// Audio encoding requested for stream URLs
    pub audio_format: String,
}

impl JamendoConfig {
    /// Create a configuration with the provider's standard defaults.
    pub fn new(base_url: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: client_id.into(),
            image_size: "400".to_string(),
            audio_format: "mp32".to_string(),
        }
    }
}

/// Client for the Jamendo v3.0 catalog API.
///
/// Stateless beyond its configuration; no internal retry or caching. Rows
/// the provider serves without a playable audio URL are dropped with a
/// warning instead of failing the whole page.
///
/// # Example
///
/// ```ignore
/// use aria_catalog::{CatalogProvider, JamendoClient, JamendoConfig};
///
/// let config = JamendoConfig::new("https://api.jamendo.com/v3.0", "my_client_id");
/// let client = JamendoClient::new(config)?;
///
/// let tracks = client.search_tracks("daft punk").await?;
/// println!("Found {} tracks", tracks.len());
/// ```
pub struct JamendoClient {
    http: Client,
    config: JamendoConfig,
}

impl JamendoClient {
    /// Create a new client with the given configuration.
    pub fn new(config: JamendoConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let config = JamendoConfig {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            ..config
        };

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("AriaPlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::Request)?;

        Ok(Self { http, config })
    }

    /// Fetch `/tracks/` with the standard query plus `params`, convert rows,
    /// and drop unplayable ones.
    async fn fetch_tracks(&self, params: &[(&str, &str)]) -> Result<Vec<Track>> {
        let url = format!("{}/tracks/", self.config.base_url);

        debug!(url = %url, params = ?params, "querying catalog");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("client_id", self.config.client_id.as_str()),
                ("format", "json"),
                ("imagesize", self.config.image_size.as_str()),
                ("audioformat", self.config.audio_format.as_str()),
            ])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                code: i64::from(status.as_u16()),
                message,
            });
        }

        let envelope: JamendoEnvelope<JamendoTrack> = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(format!("failed to parse track list: {e}")))?;

        let rows = envelope.into_results()?;
        let tracks = rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id.clone();
                match row.into_track(&self.config.image_size) {
                    Ok(track) => Some(track),
                    Err(error) => {
                        warn!(track_id = %id, %error, "dropping unplayable catalog row");
                        None
                    }
                }
            })
            .collect();
        Ok(tracks)
    }

    /// `YYYY-MM-DD_YYYY-MM-DD` window covering the last three months
    fn release_window() -> String {
        let today = Utc::now().date_naive();
        let start = today - ChronoDuration::days(90);
        format!("{start}_{today}")
    }
}

#[async_trait]
impl CatalogProvider for JamendoClient {
    async fn search_tracks(&self, query: &str) -> Result<Vec<Track>> {
        self.fetch_tracks(&[
            ("search", query),
            ("limit", "20"),
            ("boost", "popularity_total"),
        ])
        .await
    }

    async fn trending_tracks(&self) -> Result<Vec<Track>> {
        self.fetch_tracks(&[
            ("featured", "1"),
            ("limit", "10"),
            ("boost", "popularity_week"),
            ("order", "popularity_total_desc"),
        ])
        .await
    }

    async fn new_releases(&self) -> Result<Vec<Track>> {
        let window = Self::release_window();
        self.fetch_tracks(&[
            ("datebetween", window.as_str()),
            ("limit", "10"),
            ("order", "releasedate_desc"),
            ("featured", "1"),
            ("boost", "popularity_total"),
        ])
        .await
    }

    async fn track_by_id(&self, id: &str) -> Result<Track> {
        let tracks = self.fetch_tracks(&[("id", id)]).await?;
        tracks
            .into_iter()
            .next()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}
