//! # Command classifier
//!
//! Turns a raw input line into a [`jj_core::ClassifiedCommand`]: literal prefixes first
//! (`exit`, `help`, `change input`, `change output`), then question patterns found by
//! part-of-speech tagging and noun-phrase extraction, and otherwise conversation.
//!
//! Subject choice among several candidates is random by default; inject [`FirstPicker`] for
//! deterministic behaviour.

mod classifier;
mod noun_phrase;
mod picker;
mod tagger;

pub use classifier::CommandClassifier;
pub use noun_phrase::extract_noun_phrases;
pub use picker::{FirstPicker, RandomPicker, SubjectPicker};
pub use tagger::{tokenize, LexiconTagger, PosTag, TaggedToken, Tagger};
