//! Integration tests for [`command_classifier::CommandClassifier`].
//!
//! Covers: prefix commands and their priority, time/date/lookup questions, conversation fallback,
//! random subject choice staying inside the candidate set, and injected taggers/pickers.

use command_classifier::{
    CommandClassifier, FirstPicker, PosTag, SubjectPicker, TaggedToken, Tagger,
};
use jj_core::{ClassifiedCommand, CommandCategory};

fn deterministic() -> CommandClassifier {
    CommandClassifier::default().with_picker(Box::new(FirstPicker))
}

/// **Test: Any line starting with "exit" is exit, with the full line as subject.**
#[test]
fn test_exit_prefix_wins_regardless_of_trailing_content() {
    let c = deterministic();
    for line in ["exit", "exit now", "exiting the program", "exit what time is it", "exit help"] {
        let cmd = c.classify(line);
        assert_eq!(cmd.category, CommandCategory::Exit, "line: {line}");
        assert_eq!(cmd.subject(), Some(line));
    }
}

/// **Test: "help" prefix is help without subject.**
#[test]
fn test_help_prefix() {
    let c = deterministic();
    assert_eq!(c.classify("help"), ClassifiedCommand::bare(CommandCategory::Help));
    assert_eq!(
        c.classify("help me with what time it is"),
        ClassifiedCommand::bare(CommandCategory::Help)
    );
}

/// **Test: change input / change output carry the full line.**
#[test]
fn test_change_prefixes() {
    let c = deterministic();
    assert_eq!(
        c.classify("change input to dynamic speech"),
        ClassifiedCommand::with_subject(CommandCategory::ChangeInput, "change input to dynamic speech")
    );
    assert_eq!(
        c.classify("change output"),
        ClassifiedCommand::with_subject(CommandCategory::ChangeOutput, "change output")
    );
}

/// **Test: Prefixes are literal; a later "exit" or different casing does not match.**
#[test]
fn test_prefix_is_literal() {
    let c = deterministic();
    assert_eq!(c.classify("please exit").category, CommandCategory::Conversation);
    assert_eq!(c.classify("Exit").category, CommandCategory::Conversation);
}

/// **Test: "what time is it" → time; "what day is it" / "what is the date" → date; no subject.**
#[test]
fn test_time_and_date_questions() {
    let c = deterministic();
    assert_eq!(c.classify("what time is it"), ClassifiedCommand::bare(CommandCategory::Time));
    assert_eq!(c.classify("What time is it?"), ClassifiedCommand::bare(CommandCategory::Time));
    assert_eq!(c.classify("what day is it"), ClassifiedCommand::bare(CommandCategory::Date));
    assert_eq!(c.classify("what is the date today"), ClassifiedCommand::bare(CommandCategory::Date));
}

/// **Test: "what is the capital of France" → lookup; subject is one of the candidates.**
///
/// Uses the random picker many times; every subject must be a candidate.
#[test]
fn test_lookup_subject_is_a_candidate() {
    let c = CommandClassifier::default();
    for _ in 0..50 {
        let cmd = c.classify("what is the capital of France");
        assert_eq!(cmd.category, CommandCategory::Lookup);
        let subject = cmd.subject().unwrap();
        assert!(
            ["capital", "france"].contains(&subject),
            "unexpected subject {subject}"
        );
    }
}

/// **Test: who/where questions are lookups; noun phrases are preferred over single nouns.**
#[test]
fn test_who_and_where_are_lookups() {
    let c = deterministic();
    assert_eq!(
        c.classify("who is Jules Verne"),
        ClassifiedCommand::with_subject(CommandCategory::Lookup, "jules verne")
    );
    assert_eq!(
        c.classify("where is Paris"),
        ClassifiedCommand::with_subject(CommandCategory::Lookup, "paris")
    );
    assert_eq!(
        c.classify("where is the library"),
        ClassifiedCommand::with_subject(CommandCategory::Lookup, "library")
    );
}

/// **Test: Lines without an interrogative and a noun fall back to conversation with the full text.**
#[test]
fn test_conversation_fallback() {
    let c = deterministic();
    for line in ["hello there", "", "what is it", "how are you", "why is the sky blue", "tell me a joke"] {
        assert_eq!(
            c.classify(line),
            ClassifiedCommand::with_subject(CommandCategory::Conversation, line),
            "line: {line:?}"
        );
    }
}

/// **Test: Tagger and picker are injectable.**
///
/// **Setup:** Tagger that tags every word as interrogative or noun; picker that picks the last index.
/// **Expected:** "who alpha beta" → lookup with the last noun phrase chunk.
#[test]
fn test_injected_tagger_and_picker() {
    struct AllNouns;

    impl Tagger for AllNouns {
        fn tag(&self, text: &str) -> Vec<TaggedToken> {
            text.split_whitespace()
                .map(|w| {
                    let tag = if w == "who" { PosTag::Wh } else { PosTag::ProperNoun };
                    TaggedToken::new(w, tag)
                })
                .collect()
        }
    }

    struct LastPicker;

    impl SubjectPicker for LastPicker {
        fn pick(&self, len: usize) -> usize {
            len - 1
        }
    }

    let c = CommandClassifier::new(Box::new(AllNouns), Box::new(LastPicker));
    assert_eq!(
        c.classify("who alpha beta"),
        ClassifiedCommand::with_subject(CommandCategory::Lookup, "alpha beta")
    );
}

/// **Test: An out-of-range picker index is clamped instead of panicking.**
#[test]
fn test_out_of_range_pick_is_clamped() {
    struct Wild;

    impl SubjectPicker for Wild {
        fn pick(&self, _len: usize) -> usize {
            usize::MAX
        }
    }

    let c = CommandClassifier::default().with_picker(Box::new(Wild));
    let cmd = c.classify("where is the library");
    assert_eq!(cmd.subject(), Some("library"));
}
