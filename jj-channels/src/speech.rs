//! Speech channels over pluggable recognizer/synthesizer backends.
//!
//! The bundled backends run external programs: the recognizer prints one transcript on stdout,
//! the synthesizer receives the text as its last argument.

use async_trait::async_trait;
use jj_core::{ChannelError, InputChannel, OutputChannel};
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info, instrument, warn};

use crate::console::Console;

pub const LISTEN_PROMPT: &str = "Press [ENTER] or [RETURN] to begin listening. << ";
pub const LISTENING: &str = "Listening...\n";
pub const STOPPED_LISTENING: &str = "Stopped listening.\n";
pub const DEFAULT_WAKE_PHRASE: &str = "hey jj";

/// Turns one utterance into text.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Listens for one utterance. [`ChannelError::Unintelligible`] when nothing usable was heard.
    async fn listen(&self) -> Result<String, ChannelError>;
}

/// Speaks text aloud.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn speak(&self, text: &str) -> Result<(), ChannelError>;
}

/// Splits a shell-style command line into program and arguments.
fn split_command(command_line: &str) -> Result<(String, Vec<String>), ChannelError> {
    let mut parts = shlex::split(command_line)
        .ok_or_else(|| ChannelError::Unavailable(format!("unparsable command: {}", command_line)))?
        .into_iter();
    let program = parts
        .next()
        .ok_or_else(|| ChannelError::Unavailable("empty command".to_string()))?;
    Ok((program, parts.collect()))
}

fn exit_description(status: std::process::ExitStatus) -> String {
    status
        .code()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "signal".to_string())
}

/// Recognizer backed by an external program.
pub struct CommandRecognizer {
    program: String,
    args: Vec<String>,
}

impl CommandRecognizer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parses e.g. `"whisper-listen --model base"`.
    pub fn from_command_line(command_line: &str) -> Result<Self, ChannelError> {
        let (program, args) = split_command(command_line)?;
        Ok(Self::new(program, args))
    }
}

#[async_trait]
impl SpeechRecognizer for CommandRecognizer {
    #[instrument(skip(self), fields(program = %self.program))]
    async fn listen(&self) -> Result<String, ChannelError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                ChannelError::Recognition(format!("failed to start {}: {}", self.program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ChannelError::Recognition(format!(
                "{} failed (status: {}): {}",
                self.program,
                exit_description(output.status),
                stderr
            )));
        }

        let transcript = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if transcript.is_empty() {
            return Err(ChannelError::Unintelligible);
        }
        debug!(transcript_len = transcript.len(), "Recognizer produced transcript");
        Ok(transcript)
    }
}

/// Synthesizer backed by an external program.
pub struct CommandSynthesizer {
    program: String,
    args: Vec<String>,
}

impl CommandSynthesizer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_command_line(command_line: &str) -> Result<Self, ChannelError> {
        let (program, args) = split_command(command_line)?;
        Ok(Self::new(program, args))
    }
}

#[async_trait]
impl SpeechSynthesizer for CommandSynthesizer {
    #[instrument(skip(self, text), fields(program = %self.program))]
    async fn speak(&self, text: &str) -> Result<(), ChannelError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| ChannelError::Synthesis(format!("failed to start {}: {}", self.program, e)))?;

        if output.status.success() {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(ChannelError::Synthesis(format!(
            "{} failed (status: {}): {}",
            self.program,
            exit_description(output.status),
            stderr
        )))
    }
}

/// Lowercases, removes every occurrence of the wake phrase, trims.
pub fn normalize_transcript(transcript: &str, wake_phrase: &str) -> String {
    let lowered = transcript.to_lowercase();
    let wake = wake_phrase.to_lowercase();
    let without = if wake.is_empty() {
        lowered
    } else {
        lowered.replace(&wake, "")
    };
    without.trim().to_string()
}

/// The command after a leading wake phrase, or `None` if the transcript does not start with it.
pub fn strip_wake_phrase(transcript: &str, wake_phrase: &str) -> Option<String> {
    let lowered = transcript.trim().to_lowercase();
    let rest = lowered.strip_prefix(&wake_phrase.to_lowercase())?;
    Some(
        rest.trim_start_matches(|c: char| c == ',' || c == '.' || c == '!' || c.is_whitespace())
            .trim()
            .to_string(),
    )
}

/// Push-to-talk input: waits for Enter on the console, then listens once.
pub struct PromptedSpeechInput {
    console: Console,
    recognizer: Arc<dyn SpeechRecognizer>,
    wake_phrase: String,
}

impl PromptedSpeechInput {
    pub fn new(console: Console, recognizer: Arc<dyn SpeechRecognizer>) -> Self {
        Self {
            console,
            recognizer,
            wake_phrase: DEFAULT_WAKE_PHRASE.to_string(),
        }
    }

    pub fn with_wake_phrase(mut self, wake_phrase: impl Into<String>) -> Self {
        self.wake_phrase = wake_phrase.into();
        self
    }
}

#[async_trait]
impl InputChannel for PromptedSpeechInput {
    async fn read(&mut self) -> Result<Option<String>, ChannelError> {
        self.console.announce(LISTEN_PROMPT).await;
        if self.console.read_line().await?.is_none() {
            return Ok(None);
        }

        self.console.announce(LISTENING).await;
        let heard = self.recognizer.listen().await;
        self.console.announce(STOPPED_LISTENING).await;

        let transcript = heard?;
        info!(transcript_len = transcript.len(), "step: prompted speech heard");
        Ok(Some(normalize_transcript(&transcript, &self.wake_phrase)))
    }
}

/// Hands-free input: keeps listening until an utterance starts with the wake phrase.
pub struct DynamicSpeechInput {
    console: Console,
    recognizer: Arc<dyn SpeechRecognizer>,
    wake_phrase: String,
    retry_delay: Duration,
}

impl DynamicSpeechInput {
    pub fn new(console: Console, recognizer: Arc<dyn SpeechRecognizer>) -> Self {
        Self {
            console,
            recognizer,
            wake_phrase: DEFAULT_WAKE_PHRASE.to_string(),
            retry_delay: Duration::from_secs(1),
        }
    }

    pub fn with_wake_phrase(mut self, wake_phrase: impl Into<String>) -> Self {
        self.wake_phrase = wake_phrase.into();
        self
    }

    /// Pause after a backend failure before the read returns.
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }
}

#[async_trait]
impl InputChannel for DynamicSpeechInput {
    async fn read(&mut self) -> Result<Option<String>, ChannelError> {
        self.console.announce(LISTENING).await;
        loop {
            match self.recognizer.listen().await {
                Ok(transcript) => match strip_wake_phrase(&transcript, &self.wake_phrase) {
                    Some(command) => {
                        info!(command_len = command.len(), "step: wake phrase heard");
                        return Ok(Some(command));
                    }
                    None => debug!("Utterance without wake phrase ignored"),
                },
                Err(ChannelError::Unintelligible) => debug!("Unintelligible utterance ignored"),
                Err(e) => {
                    warn!(error = %e, "Speech recognizer failed");
                    if !self.retry_delay.is_zero() {
                        tokio::time::sleep(self.retry_delay).await;
                    }
                    return Err(e);
                }
            }
        }
    }
}

/// Speaks each emitted value.
pub struct SpeechOutput {
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl SpeechOutput {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { synthesizer }
    }
}

#[async_trait]
impl OutputChannel for SpeechOutput {
    async fn emit(&mut self, text: &str) -> Result<(), ChannelError> {
        self.synthesizer.speak(text).await
    }
}
