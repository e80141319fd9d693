//! Chat assistant backend client.

use crate::error::{ChatError, Result};
use crate::types::{ChatAction, ChatHistoryItem, ChatReply, RawAction};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct SendResponse {
    #[serde(default)]
    response: String,

    #[serde(default)]
    actions: Vec<RawAction>,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    #[serde(default)]
    history: Vec<ChatHistoryItem>,
}

/// Client for the chat assistant HTTP API.
///
/// Conversations are keyed by a caller-chosen session id; the backend owns
/// all conversational state.
pub struct ChatClient {
    http: Client,
    base_url: String,
}

impl ChatClient {
    /// Create a client against the given API base URL
    /// (e.g. `http://localhost:5000/api`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(ChatError::InvalidUrl("URL cannot be empty".into()));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ChatError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(format!("AriaPlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ChatError::Request)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Send a message, returning the assistant's reply and any structured
    /// actions attached to it.
    pub async fn send_message(&self, message: &str, session_id: &str) -> Result<ChatReply> {
        let url = format!("{}/chat/send", self.base_url);
        debug!(session_id = %session_id, "sending chat message");

        let response = self
            .http
            .post(&url)
            .json(&json!({
                "message": message,
                "sessionId": session_id,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ChatError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let body: SendResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Parse(format!("failed to parse chat reply: {e}")))?;

        Ok(ChatReply {
            response: body.response,
            actions: body
                .actions
                .into_iter()
                .filter_map(ChatAction::from_raw)
                .collect(),
        })
    }

    /// Fetch the past exchanges of a session.
    pub async fn history(&self, session_id: &str) -> Result<Vec<ChatHistoryItem>> {
        let url = format!("{}/chat/history", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("sessionId", session_id)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ChatError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let body: HistoryResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Parse(format!("failed to parse chat history: {e}")))?;
        Ok(body.history)
    }

    /// Clear a session's conversation on the backend.
    pub async fn reset(&self, session_id: &str) -> Result<()> {
        let url = format!("{}/chat/reset", self.base_url);

        let response = self
            .http
            .delete(&url)
            .query(&[("sessionId", session_id)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ChatError::Backend {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}
