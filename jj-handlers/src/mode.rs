//! Mode-change handlers. Each is a small sub-loop that keeps asking until it gets a kind keyword,
//! "cancel" or "exit". Keywords match as case-insensitive substrings, first listed wins.

use async_trait::async_trait;
use jj_core::{
    CommandHandler, Flow, InputEvent, InputKind, OutputKind, Result, Session,
};
use tracing::{info, warn};

use crate::prompts::{
    DEFAULT_WAKE_PHRASE_DISPLAY, INPUT_OPTIONS, OUTPUT_OPTIONS, SPEECH_INPUT_UNAVAILABLE,
    SPEECH_OUTPUT_UNAVAILABLE,
};

/// What a selection line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection<K> {
    Kind(K),
    Cancel,
    Exit,
}

fn parse_input_selection(line: &str) -> Option<Selection<InputKind>> {
    let line = line.to_lowercase();
    if line.contains("text") {
        Some(Selection::Kind(InputKind::Text))
    } else if line.contains("prompted speech") {
        Some(Selection::Kind(InputKind::PromptedSpeech))
    } else if line.contains("dynamic speech") {
        Some(Selection::Kind(InputKind::DynamicSpeech))
    } else if line.contains("cancel") {
        Some(Selection::Cancel)
    } else if line.contains("exit") {
        Some(Selection::Exit)
    } else {
        None
    }
}

fn parse_output_selection(line: &str) -> Option<Selection<OutputKind>> {
    let line = line.to_lowercase();
    if line.contains("text") {
        Some(Selection::Kind(OutputKind::Text))
    } else if line.contains("speech") {
        Some(Selection::Kind(OutputKind::Speech))
    } else if line.contains("cancel") {
        Some(Selection::Cancel)
    } else if line.contains("exit") {
        Some(Selection::Exit)
    } else {
        None
    }
}

/// Reads the next selection line. `None` means the input closed.
async fn next_selection(session: &mut Session, options: &str) -> Option<String> {
    session.emit(options).await;
    match session.read().await {
        InputEvent::Line(line) => Some(line),
        InputEvent::Nothing => Some(String::new()),
        InputEvent::Closed => None,
    }
}

/// Handles "change input ...".
pub struct ChangeInputHandler {
    wake_phrase: String,
}

impl Default for ChangeInputHandler {
    fn default() -> Self {
        Self::new(DEFAULT_WAKE_PHRASE_DISPLAY)
    }
}

impl ChangeInputHandler {
    /// `wake_phrase` is only shown in the dynamic speech confirmation.
    pub fn new(wake_phrase: impl Into<String>) -> Self {
        Self {
            wake_phrase: wake_phrase.into(),
        }
    }

    fn confirmation(&self, kind: InputKind) -> String {
        match kind {
            InputKind::DynamicSpeech => format!(
                "Input type changed to \"dynamic speech\". Preface any commands with \"{}\".",
                self.wake_phrase
            ),
            other => format!("Input type changed to \"{}\".", other),
        }
    }
}

#[async_trait]
impl CommandHandler for ChangeInputHandler {
    async fn handle(&self, session: &mut Session, subject: Option<&str>) -> Result<Flow> {
        let mut line = subject.unwrap_or_default().to_string();
        loop {
            match parse_input_selection(&line) {
                Some(Selection::Kind(kind)) => {
                    match session.set_input(kind) {
                        Ok(()) => {
                            info!(input = %kind, "step: input kind changed");
                            let confirmation = self.confirmation(kind);
                            session.emit(&confirmation).await;
                        }
                        Err(e) => {
                            warn!(error = %e, input = %kind, "Input kind unavailable");
                            session.emit(SPEECH_INPUT_UNAVAILABLE).await;
                        }
                    }
                    return Ok(Flow::Continue);
                }
                Some(Selection::Cancel) => return Ok(Flow::Continue),
                Some(Selection::Exit) => return Ok(Flow::Stop),
                None => match next_selection(session, INPUT_OPTIONS).await {
                    Some(next) => line = next,
                    None => return Ok(Flow::Stop),
                },
            }
        }
    }
}

/// Handles "change output ...".
#[derive(Default)]
pub struct ChangeOutputHandler;

impl ChangeOutputHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandHandler for ChangeOutputHandler {
    async fn handle(&self, session: &mut Session, subject: Option<&str>) -> Result<Flow> {
        let mut line = subject.unwrap_or_default().to_string();
        loop {
            match parse_output_selection(&line) {
                Some(Selection::Kind(kind)) => {
                    match session.set_output(kind) {
                        Ok(()) => {
                            info!(output = %kind, "step: output kind changed");
                            let confirmation = format!("Output type changed to \"{}\".", kind);
                            session.emit(&confirmation).await;
                        }
                        Err(e) => {
                            warn!(error = %e, output = %kind, "Output kind unavailable");
                            session.emit(SPEECH_OUTPUT_UNAVAILABLE).await;
                        }
                    }
                    return Ok(Flow::Continue);
                }
                Some(Selection::Cancel) => return Ok(Flow::Continue),
                Some(Selection::Exit) => return Ok(Flow::Stop),
                None => match next_selection(session, OUTPUT_OPTIONS).await {
                    Some(next) => line = next,
                    None => return Ok(Flow::Stop),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_keywords_in_priority_order() {
        assert_eq!(parse_input_selection("Text please"), Some(Selection::Kind(InputKind::Text)));
        assert_eq!(
            parse_input_selection("prompted speech"),
            Some(Selection::Kind(InputKind::PromptedSpeech))
        );
        assert_eq!(
            parse_input_selection("change input to Dynamic Speech"),
            Some(Selection::Kind(InputKind::DynamicSpeech))
        );
        assert_eq!(parse_input_selection("cancel"), Some(Selection::Cancel));
        assert_eq!(parse_input_selection("exit"), Some(Selection::Exit));
        assert_eq!(parse_input_selection("cancel and exit"), Some(Selection::Cancel));
        assert_eq!(parse_input_selection("speech"), None);
        assert_eq!(parse_input_selection("change input"), None);
    }

    #[test]
    fn test_output_keywords_in_priority_order() {
        assert_eq!(parse_output_selection("TEXT"), Some(Selection::Kind(OutputKind::Text)));
        assert_eq!(
            parse_output_selection("any speech will do"),
            Some(Selection::Kind(OutputKind::Speech))
        );
        assert_eq!(parse_output_selection("cancel"), Some(Selection::Cancel));
        assert_eq!(parse_output_selection("exit"), Some(Selection::Exit));
        assert_eq!(parse_output_selection("change output"), None);
    }
}
