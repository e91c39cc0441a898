//! # Channels for the JJ assistant
//!
//! Concrete [`jj_core::InputChannel`] / [`jj_core::OutputChannel`] implementations: the console
//! (typed commands and `JJ >> "..."` replies) and speech in push-to-talk, wake-phrase and
//! spoken-output flavours.

mod console;
mod speech;

pub use console::{Console, ConsoleInput, ConsoleOutput, COMMAND_PROMPT};
pub use speech::{
    normalize_transcript, strip_wake_phrase, CommandRecognizer, CommandSynthesizer,
    DynamicSpeechInput, PromptedSpeechInput, SpeechOutput, SpeechRecognizer, SpeechSynthesizer,
    DEFAULT_WAKE_PHRASE, LISTENING, LISTEN_PROMPT, STOPPED_LISTENING,
};
