//! Core types: command category, classified command, session mode, and handler flow.

use std::fmt;

/// What kind of request a line of text represents. Closed set; every category has exactly one handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCategory {
    Lookup = 0,
    Date = 1,
    Time = 2,
    Conversation = 3,
    ChangeInput = 4,
    ChangeOutput = 5,
    Help = 6,
    Exit = 7,
}

impl CommandCategory {
    /// Number of categories.
    pub const COUNT: usize = 8;

    /// All categories, ordered by [`CommandCategory::index`].
    pub const ALL: [CommandCategory; CommandCategory::COUNT] = [
        CommandCategory::Lookup,
        CommandCategory::Date,
        CommandCategory::Time,
        CommandCategory::Conversation,
        CommandCategory::ChangeInput,
        CommandCategory::ChangeOutput,
        CommandCategory::Help,
        CommandCategory::Exit,
    ];

    /// Dense index in `0..COUNT`, used by handler tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            CommandCategory::Lookup => "lookup",
            CommandCategory::Date => "date",
            CommandCategory::Time => "time",
            CommandCategory::Conversation => "conversation",
            CommandCategory::ChangeInput => "change_input",
            CommandCategory::ChangeOutput => "change_output",
            CommandCategory::Help => "help",
            CommandCategory::Exit => "exit",
        }
    }
}

impl fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified line: category plus the free-text argument, when the category takes one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedCommand {
    pub category: CommandCategory,
    pub subject: Option<String>,
}

impl ClassifiedCommand {
    /// Command with a subject.
    pub fn with_subject(category: CommandCategory, subject: impl Into<String>) -> Self {
        Self {
            category,
            subject: Some(subject.into()),
        }
    }

    /// Command without a subject.
    pub fn bare(category: CommandCategory) -> Self {
        Self {
            category,
            subject: None,
        }
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }
}

/// Where commands are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    /// Typed at the console.
    #[default]
    Text,
    /// Speech, one utterance per Enter key press.
    PromptedSpeech,
    /// Continuous listening; utterances must start with the wake phrase.
    DynamicSpeech,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::PromptedSpeech => "prompted speech",
            InputKind::DynamicSpeech => "dynamic speech",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where responses are written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputKind {
    /// Printed to the console.
    #[default]
    Text,
    /// Spoken by a speech synthesizer.
    Speech,
}

impl OutputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputKind::Text => "text",
            OutputKind::Speech => "speech",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current input/output selection of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionMode {
    pub input: InputKind,
    pub output: OutputKind,
}

/// Handler result: keep the session going or end it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

impl Flow {
    pub fn is_continue(self) -> bool {
        matches!(self, Flow::Continue)
    }
}

/// One turn's read result as seen by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A line of input.
    Line(String),
    /// Nothing usable this turn (e.g. speech not understood); keep going.
    Nothing,
    /// The channel has no further input.
    Closed,
}
