//! [`LlmClient`] over [`openai_client::OpenAIClient`], with a leading system message.

use anyhow::Result;
use async_trait::async_trait;
use tracing::instrument;

use super::{chat_message_to_openai, ChatMessage, LlmClient};

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// System prompt used when none is configured. Replies may be read aloud, so keep them plain.
pub const DEFAULT_SYSTEM_CONTENT: &str = "You are JJ, a friendly voice and text assistant. \
Answer conversationally in one to three short sentences of plain text without Markdown or lists.";

#[derive(Clone)]
pub struct OpenAILlmClient {
    client: openai_client::OpenAIClient,
    model: String,
    system_prompt: Option<String>,
}

impl OpenAILlmClient {
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::with_base_url(api_key, base_url),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_system_prompt_opt(mut self, prompt: Option<String>) -> Self {
        self.system_prompt = prompt;
        self
    }

    fn system_content(&self) -> &str {
        self.system_prompt.as_deref().unwrap_or(DEFAULT_SYSTEM_CONTENT)
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, messages), fields(model = %self.model))]
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let mut openai_messages = Vec::with_capacity(messages.len() + 1);
        openai_messages.push(chat_message_to_openai(&ChatMessage::system(
            self.system_content(),
        ))?);
        for msg in &messages {
            openai_messages.push(chat_message_to_openai(msg)?);
        }
        self.client.chat_completion(&self.model, openai_messages).await
    }
}
