//! # LLM client abstraction
//!
//! [`LlmClient`] takes a list of [`ChatMessage`]s and returns the reply text. [`OpenAILlmClient`]
//! is the OpenAI-compatible implementation; tests substitute their own.

use anyhow::Result;
use async_trait::async_trait;
use openai_client::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};

mod message;
mod openai_llm;

pub use message::{ChatMessage, MessageRole};
pub use openai_llm::{OpenAILlmClient, DEFAULT_MODEL, DEFAULT_SYSTEM_CONTENT};

/// Chat completion interface.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply for `messages` (oldest first). Implementations may prepend a system prompt.
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String>;
}

/// Converts a [`ChatMessage`] into the OpenAI request format.
fn chat_message_to_openai(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage> {
    let content = msg.content.clone();
    let openai_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()?
            .into(),
    };
    Ok(openai_msg)
}
