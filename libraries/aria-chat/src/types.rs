//! Chat wire types and structured actions.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Structured action the assistant attaches to a reply
///
/// Actions arrive as `{type, data}` objects; only the shapes the player can
/// act on are modeled. Unknown action types are skipped with a warning
/// rather than failing the whole reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatAction {
    /// Request playback of a catalog track
    PlayTrack {
        /// Catalog track id named by the assistant
        track_id: String,
        /// Track title as the assistant phrased it
        title: String,
    },
}

/// An action exactly as the backend serializes it
#[derive(Debug, Deserialize)]
pub(crate) struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub data: serde_json::Value,
}

impl ChatAction {
    /// Parse a raw `{type, data}` action, returning `None` for shapes the
    /// player does not handle.
    pub(crate) fn from_raw(raw: RawAction) -> Option<Self> {
        match raw.kind.as_str() {
            "PLAY_TRACK" => {
                let track_id = raw.data.get("trackId")?.as_str()?.to_string();
                let title = raw.data.get("title")?.as_str()?.to_string();
                Some(ChatAction::PlayTrack { track_id, title })
            }
            other => {
                warn!(action_type = %other, "skipping unknown chat action");
                None
            }
        }
    }
}

/// A reply from the assistant: the conversational text plus any structured
/// actions the player should carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// Conversational response text
    pub response: String,

    /// Actions the player should perform
    pub actions: Vec<ChatAction>,
}

/// One past exchange returned by the history endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatHistoryItem {
    /// What the user sent
    pub message: String,

    /// What the assistant answered
    pub response: String,

    /// Backend-supplied timestamp, as serialized
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_play_track_action() {
        let raw: RawAction = serde_json::from_value(json!({
            "type": "PLAY_TRACK",
            "data": { "trackId": "168", "title": "Sample Song" }
        }))
        .unwrap();

        assert_eq!(
            ChatAction::from_raw(raw),
            Some(ChatAction::PlayTrack {
                track_id: "168".to_string(),
                title: "Sample Song".to_string()
            })
        );
    }

    #[test]
    fn unknown_action_type_is_skipped() {
        let raw: RawAction = serde_json::from_value(json!({
            "type": "CREATE_PLAYLIST",
            "data": { "name": "Mix", "songs": [] }
        }))
        .unwrap();

        assert_eq!(ChatAction::from_raw(raw), None);
    }

    #[test]
    fn malformed_play_track_data_is_skipped() {
        let raw: RawAction = serde_json::from_value(json!({
            "type": "PLAY_TRACK",
            "data": { "trackId": 42 }
        }))
        .unwrap();

        assert_eq!(ChatAction::from_raw(raw), None);
    }
}
