//! # Conversation engines
//!
//! [`LlmConversation`] sends a rolling window of the exchange to an [`llm_client::LlmClient`].
//! [`CannedConversation`] answers a fixed phrase table and needs no network.

mod canned;
mod llm;

pub use canned::{CannedConversation, DEFAULT_CANNED_REPLY};
pub use llm::{LlmConversation, DEFAULT_HISTORY_LIMIT};
