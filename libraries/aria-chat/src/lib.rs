//! Aria Player - Chat Assistant
//!
//! Client for the chat assistant backend plus resolution of the structured
//! actions it returns.
//!
//! The assistant replies with conversational text and optional actions such
//! as "play track X". [`ChatClient`] handles the HTTP surface;
//! [`ActionResolver`] turns an action's track id into a playable
//! [`aria_core::Track`], degrading to an explicitly-flagged placeholder when
//! the catalog cannot resolve it.

pub mod action;
pub mod client;
pub mod error;
pub mod types;

pub use action::{ActionResolver, Resolution};
pub use client::ChatClient;
pub use error::{ChatError, Result};
pub use types::{ChatAction, ChatHistoryItem, ChatReply};
