//! Channel abstractions for reading commands and writing responses.
//!
//! [`InputChannel`] and [`OutputChannel`] are medium-agnostic; jj-channels implements them for the
//! console and for speech.

use crate::error::ChannelError;
use async_trait::async_trait;

/// Source of command lines (console, speech recognizer, ...).
#[async_trait]
pub trait InputChannel: Send {
    /// Reads the next line. `Ok(None)` means the channel is closed; `Err` means nothing usable this turn.
    async fn read(&mut self) -> Result<Option<String>, ChannelError>;
}

/// Sink for response text (console, speech synthesizer, ...).
#[async_trait]
pub trait OutputChannel: Send {
    /// Writes one response.
    async fn emit(&mut self, text: &str) -> Result<(), ChannelError>;
}
