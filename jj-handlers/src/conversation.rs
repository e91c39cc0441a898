//! Conversation handler: free text goes to the [`ConversationEngine`].

use async_trait::async_trait;
use jj_core::{CommandHandler, ConversationEngine, Flow, Result, Session};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::prompts::PROMPT_ERROR;

/// Emits the engine's reply; the apology on engine failure; nothing for blank input.
pub struct ConversationHandler {
    engine: Arc<dyn ConversationEngine>,
}

impl ConversationHandler {
    pub fn new(engine: Arc<dyn ConversationEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl CommandHandler for ConversationHandler {
    #[instrument(skip(self, session, subject))]
    async fn handle(&self, session: &mut Session, subject: Option<&str>) -> Result<Flow> {
        let Some(text) = subject.map(str::trim).filter(|s| !s.is_empty()) else {
            debug!("Blank conversation input ignored");
            return Ok(Flow::Continue);
        };

        match self.engine.respond(text).await {
            Ok(reply) => {
                info!(reply_len = reply.len(), "step: conversation reply");
                session.emit_opt(Some(reply.as_str()).filter(|r| !r.trim().is_empty())).await;
            }
            Err(e) => {
                warn!(error = %e, "Conversation engine failed");
                session.emit(PROMPT_ERROR).await;
            }
        }
        Ok(Flow::Continue)
    }
}
