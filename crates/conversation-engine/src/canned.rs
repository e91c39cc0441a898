//! Offline engine: exact phrase → reply.

use async_trait::async_trait;
use jj_core::ConversationEngine;
use std::collections::HashMap;
use tracing::debug;

/// Reply for anything not in the table.
pub const DEFAULT_CANNED_REPLY: &str = "I'm sorry, I don't quite understand.";

const BUILT_IN: &[(&str, &str)] = &[
    ("hello", "Hello! How can I help you?"),
    ("hi", "Hello! How can I help you?"),
    ("hey", "Hello! How can I help you?"),
    ("good morning", "Good morning! How can I help you?"),
    ("good evening", "Good evening! How can I help you?"),
    ("how are you", "I'm doing well, thank you for asking."),
    ("thank you", "You're welcome!"),
    ("thanks", "You're welcome!"),
    ("goodbye", "Goodbye! Type \"exit\" whenever you want to leave."),
];

/// Matches the whole input, ignoring case, surrounding whitespace and trailing punctuation.
#[derive(Debug, Clone)]
pub struct CannedConversation {
    replies: HashMap<String, String>,
    fallback: String,
}

fn normalize(text: &str) -> String {
    text.trim()
        .trim_end_matches(|c: char| c.is_ascii_punctuation())
        .trim()
        .to_lowercase()
}

impl Default for CannedConversation {
    fn default() -> Self {
        let mut engine = Self::empty();
        for &(phrase, reply) in BUILT_IN {
            engine = engine.with_reply(phrase, reply);
        }
        engine
    }
}

impl CannedConversation {
    /// No phrases; every input gets the fallback.
    pub fn empty() -> Self {
        Self {
            replies: HashMap::new(),
            fallback: DEFAULT_CANNED_REPLY.to_string(),
        }
    }

    pub fn with_reply(mut self, phrase: &str, reply: impl Into<String>) -> Self {
        self.replies.insert(normalize(phrase), reply.into());
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn reply_for(&self, text: &str) -> &str {
        self.replies
            .get(&normalize(text))
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}

#[async_trait]
impl ConversationEngine for CannedConversation {
    async fn respond(&self, text: &str) -> anyhow::Result<String> {
        let reply = self.reply_for(text);
        debug!(matched = reply != self.fallback, "Canned reply chosen");
        Ok(reply.to_string())
    }
}
