//! Console channels. [`Console`] is a cloneable handle over one reader and one writer, so the text
//! input, the prompted speech input and the text output all share the same terminal.

use async_trait::async_trait;
use jj_core::{ChannelError, InputChannel, OutputChannel};
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Prompt printed before each typed command.
pub const COMMAND_PROMPT: &str = "Command << ";

type SharedReader = Arc<Mutex<Box<dyn AsyncBufRead + Send + Unpin>>>;
type SharedWriter = Arc<Mutex<Box<dyn AsyncWrite + Send + Unpin>>>;

/// Line-oriented terminal handle.
#[derive(Clone)]
pub struct Console {
    reader: SharedReader,
    writer: SharedWriter,
}

impl Console {
    pub fn new<R, W>(reader: R, writer: W) -> Self
    where
        R: AsyncBufRead + Send + Unpin + 'static,
        W: AsyncWrite + Send + Unpin + 'static,
    {
        Self {
            reader: Arc::new(Mutex::new(Box::new(reader))),
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }

    /// Reads one line without its line ending. `None` at end of input.
    pub async fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let n = self.reader.lock().await.read_line(&mut line).await?;
        if n == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Writes `text` as is and flushes.
    pub async fn write(&self, text: &str) -> io::Result<()> {
        let mut writer = self.writer.lock().await;
        writer.write_all(text.as_bytes()).await?;
        writer.flush().await
    }

    /// Writes a prompt or status line. A failed write is logged and the caller keeps reading.
    pub async fn announce(&self, text: &str) {
        if let Err(e) = self.write(text).await {
            warn!(error = %e, text = %text.trim_end(), "Console prompt write failed");
        }
    }
}

/// Typed commands: prints the prompt and reads one trimmed line.
pub struct ConsoleInput {
    console: Console,
    prompt: String,
}

impl ConsoleInput {
    pub fn new(console: Console) -> Self {
        Self {
            console,
            prompt: COMMAND_PROMPT.to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}

#[async_trait]
impl InputChannel for ConsoleInput {
    async fn read(&mut self) -> Result<Option<String>, ChannelError> {
        self.console.announce(&self.prompt).await;
        let line = self.console.read_line().await?;
        if line.is_none() {
            debug!("Console input reached end of file");
        }
        Ok(line.map(|l| l.trim().to_string()))
    }
}

/// Writes `NAME >> "text"` followed by a blank line.
pub struct ConsoleOutput {
    console: Console,
    name: String,
}

impl ConsoleOutput {
    pub fn new(console: Console, name: impl Into<String>) -> Self {
        Self {
            console,
            name: name.into(),
        }
    }
}

#[async_trait]
impl OutputChannel for ConsoleOutput {
    async fn emit(&mut self, text: &str) -> Result<(), ChannelError> {
        let formatted = format!("{} >> \"{}\"\n\n", self.name, text);
        self.console.write(&formatted).await?;
        Ok(())
    }
}
