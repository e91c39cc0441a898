//! Help and exit handlers.

use async_trait::async_trait;
use jj_core::{CommandHandler, Flow, Result, Session};

use crate::prompts::{help_text, DEFAULT_ASSISTANT_NAME};

/// Emits the help text.
pub struct HelpHandler {
    text: String,
}

impl Default for HelpHandler {
    fn default() -> Self {
        Self::new(help_text(DEFAULT_ASSISTANT_NAME))
    }
}

impl HelpHandler {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl CommandHandler for HelpHandler {
    async fn handle(&self, session: &mut Session, _subject: Option<&str>) -> Result<Flow> {
        session.emit(&self.text).await;
        Ok(Flow::Continue)
    }
}

/// Ends the session.
#[derive(Default)]
pub struct ExitHandler;

#[async_trait]
impl CommandHandler for ExitHandler {
    async fn handle(&self, _session: &mut Session, _subject: Option<&str>) -> Result<Flow> {
        Ok(Flow::Stop)
    }
}
