//! LLM-backed engine with a rolling message window.

use async_trait::async_trait;
use jj_core::ConversationEngine;
use llm_client::{ChatMessage, LlmClient, MessageRole};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument};

/// Messages kept (user and assistant together).
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

pub struct LlmConversation {
    client: Arc<dyn LlmClient>,
    history: Mutex<VecDeque<ChatMessage>>,
    history_limit: usize,
}

impl LlmConversation {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self {
            client,
            history: Mutex::new(VecDeque::new()),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// 0 sends each message without context.
    pub fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit;
        self
    }

    /// Snapshot of the stored window, oldest first.
    pub async fn history(&self) -> Vec<ChatMessage> {
        self.history.lock().await.iter().cloned().collect()
    }
}

/// Drops the oldest messages until `limit` fits, never leaving an assistant reply
/// at the front without the user message it answered.
fn trim_window(history: &mut VecDeque<ChatMessage>, limit: usize) {
    while history.len() > limit {
        history.pop_front();
        while history.front().is_some_and(|m| m.role != MessageRole::User) {
            history.pop_front();
        }
    }
}

#[async_trait]
impl ConversationEngine for LlmConversation {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn respond(&self, text: &str) -> anyhow::Result<String> {
        // Held for the whole turn.
        let mut history = self.history.lock().await;

        let mut messages: Vec<ChatMessage> = history.iter().cloned().collect();
        messages.push(ChatMessage::user(text));
        info!(message_count = messages.len(), "step: LLM conversation request");

        let reply = self.client.complete(messages).await?;

        history.push_back(ChatMessage::user(text));
        history.push_back(ChatMessage::assistant(reply.clone()));
        trim_window(&mut history, self.history_limit);
        Ok(reply)
    }
}
