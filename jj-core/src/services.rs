//! External collaborators used by handlers: knowledge lookup, conversation engine, clock.

use crate::error::LookupError;
use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};

/// Looks up a subject and returns a short plain-text summary.
#[async_trait]
pub trait KnowledgeLookup: Send + Sync {
    /// Returns at most `max_sentences` sentences about `subject`.
    async fn summarize(&self, subject: &str, max_sentences: usize) -> Result<String, LookupError>;
}

/// Best-effort conversational reply generator.
#[async_trait]
pub trait ConversationEngine: Send + Sync {
    async fn respond(&self, text: &str) -> anyhow::Result<String>;
}

/// Source of the current local date and time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// [`Clock`] backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
