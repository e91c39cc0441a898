//! # Handlers for the JJ assistant
//!
//! One [`jj_core::CommandHandler`] per command category: lookup, date, time, conversation, the
//! input/output mode sub-loops, help and exit. [`build_handler_table`] wires them into a
//! [`command_router::HandlerTable`].

mod clock;
mod control;
mod conversation;
mod lookup;
mod mode;
mod prompts;
mod table;

#[cfg(test)]
mod test;

pub use clock::{DateHandler, TimeHandler};
pub use control::{ExitHandler, HelpHandler};
pub use conversation::ConversationHandler;
pub use lookup::{LookupHandler, DEFAULT_MAX_SENTENCES};
pub use mode::{ChangeInputHandler, ChangeOutputHandler};
pub use prompts::{
    help_text, DEFAULT_ASSISTANT_NAME, DEFAULT_WAKE_PHRASE_DISPLAY, INPUT_OPTIONS, OUTPUT_OPTIONS,
    PROMPT_ERROR, SPEECH_INPUT_UNAVAILABLE, SPEECH_OUTPUT_UNAVAILABLE,
};
pub use table::{build_handler_table, HandlerServices};
