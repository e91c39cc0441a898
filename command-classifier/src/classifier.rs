//! [`CommandClassifier`]: raw line → [`ClassifiedCommand`]. Never fails; anything unrecognized is conversation.

use jj_core::{ClassifiedCommand, CommandCategory};
use tracing::debug;

use crate::noun_phrase::extract_noun_phrases;
use crate::picker::{RandomPicker, SubjectPicker};
use crate::tagger::{LexiconTagger, Tagger};

const PREFIX_EXIT: &str = "exit";
const PREFIX_HELP: &str = "help";
const PREFIX_CHANGE_INPUT: &str = "change input";
const PREFIX_CHANGE_OUTPUT: &str = "change output";

/// Classifies input lines by literal prefix, then by interrogative + noun patterns.
pub struct CommandClassifier {
    tagger: Box<dyn Tagger>,
    picker: Box<dyn SubjectPicker>,
}

impl Default for CommandClassifier {
    fn default() -> Self {
        Self::new(Box::new(LexiconTagger::new()), Box::new(RandomPicker))
    }
}

impl CommandClassifier {
    pub fn new(tagger: Box<dyn Tagger>, picker: Box<dyn SubjectPicker>) -> Self {
        Self { tagger, picker }
    }

    /// Replaces the subject picker (e.g. [`crate::FirstPicker`] for reproducible subjects).
    pub fn with_picker(mut self, picker: Box<dyn SubjectPicker>) -> Self {
        self.picker = picker;
        self
    }

    /// Classifies one line. Prefix commands win over question patterns; the fallback is
    /// conversation with the whole line as subject.
    pub fn classify(&self, text: &str) -> ClassifiedCommand {
        let command = if text.starts_with(PREFIX_EXIT) {
            ClassifiedCommand::with_subject(CommandCategory::Exit, text)
        } else if text.starts_with(PREFIX_HELP) {
            ClassifiedCommand::bare(CommandCategory::Help)
        } else if text.starts_with(PREFIX_CHANGE_INPUT) {
            ClassifiedCommand::with_subject(CommandCategory::ChangeInput, text)
        } else if text.starts_with(PREFIX_CHANGE_OUTPUT) {
            ClassifiedCommand::with_subject(CommandCategory::ChangeOutput, text)
        } else {
            self.classify_question(text)
                .unwrap_or_else(|| ClassifiedCommand::with_subject(CommandCategory::Conversation, text))
        };

        debug!(
            category = %command.category,
            subject = ?command.subject,
            "Classified command"
        );
        command
    }

    /// Question patterns: needs an interrogative and a noun.
    /// "what" + time → time, "what" + date/day → date, "what"/"who"/"where" → lookup.
    fn classify_question(&self, text: &str) -> Option<ClassifiedCommand> {
        let tokens = self.tagger.tag(text);

        let questions: Vec<String> = tokens
            .iter()
            .filter(|t| t.tag.is_wh())
            .map(|t| t.word.to_lowercase())
            .collect();
        let nouns: Vec<&str> = tokens
            .iter()
            .filter(|t| t.tag.is_noun())
            .map(|t| t.word.as_str())
            .collect();

        if questions.is_empty() || nouns.is_empty() {
            return None;
        }

        let phrases = extract_noun_phrases(&tokens);
        let subject = if phrases.is_empty() {
            nouns[self.pick_index(nouns.len())].to_string()
        } else {
            phrases[self.pick_index(phrases.len())].clone()
        };

        let asks = |word: &str| questions.iter().any(|q| q == word);
        let mentions = |word: &str| nouns.iter().any(|n| n.eq_ignore_ascii_case(word));

        if asks("what") {
            if mentions("time") {
                return Some(ClassifiedCommand::bare(CommandCategory::Time));
            }
            if mentions("date") || mentions("day") {
                return Some(ClassifiedCommand::bare(CommandCategory::Date));
            }
            return Some(ClassifiedCommand::with_subject(CommandCategory::Lookup, subject));
        }
        if asks("who") || asks("where") {
            return Some(ClassifiedCommand::with_subject(CommandCategory::Lookup, subject));
        }
        None
    }

    fn pick_index(&self, len: usize) -> usize {
        self.picker.pick(len).min(len - 1)
    }
}
