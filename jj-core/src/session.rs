//! Session: the current [`SessionMode`] plus the channels it selects between.
//!
//! The text channels are always present; speech channels are optional and a mode can only be switched
//! to a kind whose channel exists, so the current mode always names a usable channel.

use crate::channel::{InputChannel, OutputChannel};
use crate::error::ChannelError;
use crate::types::{InputEvent, InputKind, OutputKind, SessionMode};
use tracing::{debug, warn};

/// Input channels by kind.
pub struct InputChannels {
    pub text: Box<dyn InputChannel>,
    pub prompted_speech: Option<Box<dyn InputChannel>>,
    pub dynamic_speech: Option<Box<dyn InputChannel>>,
}

impl InputChannels {
    /// Only the text channel; speech kinds are unavailable.
    pub fn text_only(text: Box<dyn InputChannel>) -> Self {
        Self {
            text,
            prompted_speech: None,
            dynamic_speech: None,
        }
    }

    pub fn with_prompted_speech(mut self, channel: Box<dyn InputChannel>) -> Self {
        self.prompted_speech = Some(channel);
        self
    }

    pub fn with_dynamic_speech(mut self, channel: Box<dyn InputChannel>) -> Self {
        self.dynamic_speech = Some(channel);
        self
    }

    fn supports(&self, kind: InputKind) -> bool {
        match kind {
            InputKind::Text => true,
            InputKind::PromptedSpeech => self.prompted_speech.is_some(),
            InputKind::DynamicSpeech => self.dynamic_speech.is_some(),
        }
    }
}

/// Output channels by kind.
pub struct OutputChannels {
    pub text: Box<dyn OutputChannel>,
    pub speech: Option<Box<dyn OutputChannel>>,
}

impl OutputChannels {
    /// Only the text channel; speech output is unavailable.
    pub fn text_only(text: Box<dyn OutputChannel>) -> Self {
        Self { text, speech: None }
    }

    pub fn with_speech(mut self, channel: Box<dyn OutputChannel>) -> Self {
        self.speech = Some(channel);
        self
    }

    fn supports(&self, kind: OutputKind) -> bool {
        match kind {
            OutputKind::Text => true,
            OutputKind::Speech => self.speech.is_some(),
        }
    }
}

/// Mutable interaction state: mode and channels. Handlers read and write only through this.
pub struct Session {
    mode: SessionMode,
    inputs: InputChannels,
    outputs: OutputChannels,
}

impl Session {
    /// Creates a session in text/text mode.
    pub fn new(inputs: InputChannels, outputs: OutputChannels) -> Self {
        Self {
            mode: SessionMode::default(),
            inputs,
            outputs,
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Switches the input kind. Fails with [`ChannelError::Unavailable`] (mode unchanged) if no channel exists for it.
    pub fn set_input(&mut self, kind: InputKind) -> Result<(), ChannelError> {
        if !self.inputs.supports(kind) {
            return Err(ChannelError::Unavailable(format!("{} input", kind)));
        }
        debug!(from = %self.mode.input, to = %kind, "Input kind changed");
        self.mode.input = kind;
        Ok(())
    }

    /// Switches the output kind. Fails with [`ChannelError::Unavailable`] (mode unchanged) if no channel exists for it.
    pub fn set_output(&mut self, kind: OutputKind) -> Result<(), ChannelError> {
        if !self.outputs.supports(kind) {
            return Err(ChannelError::Unavailable(format!("{} output", kind)));
        }
        debug!(from = %self.mode.output, to = %kind, "Output kind changed");
        self.mode.output = kind;
        Ok(())
    }

    /// Reads from the current input channel. Channel errors become [`InputEvent::Nothing`].
    pub async fn read(&mut self) -> InputEvent {
        let result = match self.mode.input {
            InputKind::Text => self.inputs.text.read().await,
            InputKind::PromptedSpeech => match self.inputs.prompted_speech.as_mut() {
                Some(channel) => channel.read().await,
                None => self.inputs.text.read().await,
            },
            InputKind::DynamicSpeech => match self.inputs.dynamic_speech.as_mut() {
                Some(channel) => channel.read().await,
                None => self.inputs.text.read().await,
            },
        };

        match result {
            Ok(Some(line)) => InputEvent::Line(line),
            Ok(None) => {
                debug!(input = %self.mode.input, "Input channel closed");
                InputEvent::Closed
            }
            Err(e) => {
                warn!(error = %e, input = %self.mode.input, "Read failed, no command this turn");
                InputEvent::Nothing
            }
        }
    }

    /// Writes to the current output channel. Errors are logged and dropped.
    pub async fn emit(&mut self, text: &str) {
        let result = match self.mode.output {
            OutputKind::Text => self.outputs.text.emit(text).await,
            OutputKind::Speech => match self.outputs.speech.as_mut() {
                Some(channel) => channel.emit(text).await,
                None => self.outputs.text.emit(text).await,
            },
        };
        if let Err(e) = result {
            warn!(error = %e, output = %self.mode.output, "Emit failed");
        }
    }

    /// Like [`Session::emit`]; `None` is ignored.
    pub async fn emit_opt(&mut self, text: Option<&str>) {
        if let Some(text) = text {
            self.emit(text).await;
        }
    }
}
