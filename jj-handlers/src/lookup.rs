//! Lookup handler: summarize the subject through a [`KnowledgeLookup`].

use async_trait::async_trait;
use jj_core::{CommandHandler, Flow, KnowledgeLookup, Result, Session};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::prompts::PROMPT_ERROR;

/// Default number of summary sentences.
pub const DEFAULT_MAX_SENTENCES: usize = 3;

/// Emits a short summary of the subject, or the apology if the lookup fails.
pub struct LookupHandler {
    lookup: Arc<dyn KnowledgeLookup>,
    max_sentences: usize,
}

impl LookupHandler {
    pub fn new(lookup: Arc<dyn KnowledgeLookup>) -> Self {
        Self {
            lookup,
            max_sentences: DEFAULT_MAX_SENTENCES,
        }
    }

    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences.max(1);
        self
    }
}

#[async_trait]
impl CommandHandler for LookupHandler {
    #[instrument(skip(self, session))]
    async fn handle(&self, session: &mut Session, subject: Option<&str>) -> Result<Flow> {
        let Some(subject) = subject.map(str::trim).filter(|s| !s.is_empty()) else {
            debug!("Lookup without subject, nothing to do");
            return Ok(Flow::Continue);
        };

        match self.lookup.summarize(subject, self.max_sentences).await {
            Ok(summary) => {
                info!(subject = %subject, summary_len = summary.len(), "step: lookup done");
                session.emit(&summary).await;
            }
            Err(e) => {
                warn!(error = %e, subject = %subject, "Lookup failed");
                session.emit(PROMPT_ERROR).await;
            }
        }
        Ok(Flow::Continue)
    }
}
