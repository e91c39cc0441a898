//! Conversation engines with a mock [`LlmClient`].

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use conversation_engine::{CannedConversation, LlmConversation, DEFAULT_CANNED_REPLY};
use jj_core::ConversationEngine;
use llm_client::{ChatMessage, LlmClient, MessageRole};

/// Records every request and replies "reply N"; fails while `fail` is set.
#[derive(Default)]
struct MockLlm {
    requests: Mutex<Vec<Vec<ChatMessage>>>,
    fail: Mutex<bool>,
}

impl MockLlm {
    fn last_request(&self) -> Vec<ChatMessage> {
        self.requests.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn complete(&self, messages: Vec<ChatMessage>) -> anyhow::Result<String> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(messages);
        if *self.fail.lock().unwrap() {
            anyhow::bail!("rate limited");
        }
        Ok(format!("reply {}", requests.len()))
    }
}

/// **Test: Each request carries the prior exchange followed by the new user message.**
#[tokio::test]
async fn test_llm_conversation_sends_history() {
    let llm = Arc::new(MockLlm::default());
    let engine = LlmConversation::new(llm.clone());

    assert_eq!(engine.respond("hi").await.unwrap(), "reply 1");
    assert_eq!(engine.respond("tell me more").await.unwrap(), "reply 2");

    assert_eq!(
        llm.last_request(),
        vec![
            ChatMessage::user("hi"),
            ChatMessage::assistant("reply 1"),
            ChatMessage::user("tell me more"),
        ]
    );
}

/// **Test: The stored window never exceeds the limit; oldest messages go first.**
#[tokio::test]
async fn test_llm_conversation_history_window() {
    let llm = Arc::new(MockLlm::default());
    let engine = LlmConversation::new(llm.clone()).with_history_limit(4);

    for turn in ["one", "two", "three"] {
        engine.respond(turn).await.unwrap();
    }

    let history = engine.history().await;
    assert_eq!(history.len(), 4);
    assert_eq!(history[0], ChatMessage::user("two"));
    assert_eq!(history[3], ChatMessage::assistant("reply 3"));
    assert_eq!(llm.last_request().len(), 5);
}

/// **Test: An odd limit drops whole exchanges, so the window always opens with a user message.**
#[tokio::test]
async fn test_llm_conversation_odd_history_limit() {
    let llm = Arc::new(MockLlm::default());
    let engine = LlmConversation::new(llm.clone()).with_history_limit(3);

    for turn in ["one", "two", "three"] {
        engine.respond(turn).await.unwrap();
        let history = engine.history().await;
        assert!(history.len() <= 3);
        assert_eq!(history[0].role, MessageRole::User);
    }

    assert_eq!(
        llm.last_request(),
        vec![
            ChatMessage::user("two"),
            ChatMessage::assistant("reply 2"),
            ChatMessage::user("three"),
        ]
    );
    assert_eq!(
        engine.history().await,
        vec![ChatMessage::user("three"), ChatMessage::assistant("reply 3")]
    );
}

/// **Test: A failed request leaves the history untouched.**
#[tokio::test]
async fn test_llm_conversation_failure_keeps_history() {
    let llm = Arc::new(MockLlm::default());
    let engine = LlmConversation::new(llm.clone());

    engine.respond("hello").await.unwrap();
    *llm.fail.lock().unwrap() = true;
    assert!(engine.respond("are you there").await.is_err());

    let history = engine.history().await;
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|m| m.content != "are you there"));
    assert_eq!(history[1].role, MessageRole::Assistant);
}

/// **Test: Zero history sends only the current message.**
#[tokio::test]
async fn test_llm_conversation_without_history() {
    let llm = Arc::new(MockLlm::default());
    let engine = LlmConversation::new(llm.clone()).with_history_limit(0);

    engine.respond("first").await.unwrap();
    engine.respond("second").await.unwrap();

    assert_eq!(llm.last_request(), vec![ChatMessage::user("second")]);
    assert!(engine.history().await.is_empty());
}

#[tokio::test]
async fn test_canned_conversation_matches_whole_phrase() {
    let engine = CannedConversation::default();

    assert_eq!(engine.respond("Hello!").await.unwrap(), "Hello! How can I help you?");
    assert_eq!(engine.respond("  how are you?  ").await.unwrap(), "I'm doing well, thank you for asking.");
    assert_eq!(engine.respond("hello there").await.unwrap(), DEFAULT_CANNED_REPLY);
}

/// **Test: Every built-in phrase answers with its own reply, not the fallback.**
#[tokio::test]
async fn test_canned_conversation_built_in_replies() {
    let engine = CannedConversation::default();

    assert_eq!(engine.respond("Hi").await.unwrap(), "Hello! How can I help you?");
    assert_eq!(engine.respond("Good morning.").await.unwrap(), "Good morning! How can I help you?");
    assert_eq!(engine.respond("good evening").await.unwrap(), "Good evening! How can I help you?");
    assert_eq!(engine.respond("Thanks!").await.unwrap(), "You're welcome!");
    assert_eq!(engine.respond("thank you").await.unwrap(), "You're welcome!");
    assert_eq!(
        engine.respond("Goodbye").await.unwrap(),
        "Goodbye! Type \"exit\" whenever you want to leave."
    );
}

#[tokio::test]
async fn test_canned_conversation_custom_table() {
    let engine = CannedConversation::empty()
        .with_reply("Open the pod bay doors", "I'm afraid I can't do that.")
        .with_fallback("Hmm?");

    assert_eq!(engine.respond("open the pod bay doors.").await.unwrap(), "I'm afraid I can't do that.");
    assert_eq!(engine.respond("hello").await.unwrap(), "Hmm?");
}
