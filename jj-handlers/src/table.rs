//! Builds the standard [`HandlerTable`] from the external collaborators.

use command_router::HandlerTable;
use jj_core::{Clock, CommandCategory, CommandHandler, ConversationEngine, KnowledgeLookup};
use std::sync::Arc;

use crate::clock::{DateHandler, TimeHandler};
use crate::control::{ExitHandler, HelpHandler};
use crate::conversation::ConversationHandler;
use crate::lookup::{LookupHandler, DEFAULT_MAX_SENTENCES};
use crate::mode::{ChangeInputHandler, ChangeOutputHandler};
use crate::prompts::{help_text, DEFAULT_ASSISTANT_NAME, DEFAULT_WAKE_PHRASE_DISPLAY};

/// Collaborators and settings the handlers need.
pub struct HandlerServices {
    pub lookup: Arc<dyn KnowledgeLookup>,
    pub conversation: Arc<dyn ConversationEngine>,
    pub clock: Arc<dyn Clock>,
    pub lookup_max_sentences: usize,
    pub help_text: String,
    pub wake_phrase: String,
}

impl HandlerServices {
    /// Services with default settings (3 sentences, default help text and wake phrase).
    pub fn new(
        lookup: Arc<dyn KnowledgeLookup>,
        conversation: Arc<dyn ConversationEngine>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            lookup,
            conversation,
            clock,
            lookup_max_sentences: DEFAULT_MAX_SENTENCES,
            help_text: help_text(DEFAULT_ASSISTANT_NAME),
            wake_phrase: DEFAULT_WAKE_PHRASE_DISPLAY.to_string(),
        }
    }
}

/// One handler per category, wired to `services`.
pub fn build_handler_table(services: HandlerServices) -> HandlerTable {
    let lookup: Arc<dyn CommandHandler> = Arc::new(
        LookupHandler::new(services.lookup).with_max_sentences(services.lookup_max_sentences),
    );
    let date: Arc<dyn CommandHandler> = Arc::new(DateHandler::new(services.clock.clone()));
    let time: Arc<dyn CommandHandler> = Arc::new(TimeHandler::new(services.clock));
    let conversation: Arc<dyn CommandHandler> =
        Arc::new(ConversationHandler::new(services.conversation));
    let change_input: Arc<dyn CommandHandler> =
        Arc::new(ChangeInputHandler::new(services.wake_phrase));
    let change_output: Arc<dyn CommandHandler> = Arc::new(ChangeOutputHandler::new());
    let help: Arc<dyn CommandHandler> = Arc::new(HelpHandler::new(services.help_text));
    let exit: Arc<dyn CommandHandler> = Arc::new(ExitHandler);

    HandlerTable::from_fn(|category| match category {
        CommandCategory::Lookup => lookup.clone(),
        CommandCategory::Date => date.clone(),
        CommandCategory::Time => time.clone(),
        CommandCategory::Conversation => conversation.clone(),
        CommandCategory::ChangeInput => change_input.clone(),
        CommandCategory::ChangeOutput => change_output.clone(),
        CommandCategory::Help => help.clone(),
        CommandCategory::Exit => exit.clone(),
    })
}
