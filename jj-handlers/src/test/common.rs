//! Shared test doubles: scripted input, recording output, mock collaborators.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use jj_core::{
    ChannelError, Clock, ConversationEngine, InputChannel, InputChannels, KnowledgeLookup,
    LookupError, OutputChannel, OutputChannels, Session,
};

pub type Lines = Arc<Mutex<Vec<String>>>;

pub struct ScriptedInput(pub VecDeque<Result<Option<String>, ChannelError>>);

#[async_trait]
impl InputChannel for ScriptedInput {
    async fn read(&mut self) -> Result<Option<String>, ChannelError> {
        self.0.pop_front().unwrap_or(Ok(None))
    }
}

pub struct RecordingOutput(pub Lines);

#[async_trait]
impl OutputChannel for RecordingOutput {
    async fn emit(&mut self, text: &str) -> Result<(), ChannelError> {
        self.0.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub fn line(s: &str) -> Result<Option<String>, ChannelError> {
    Ok(Some(s.to_string()))
}

/// Handles to what a test session wrote.
pub struct Outputs {
    pub text: Lines,
    pub speech: Lines,
}

impl Outputs {
    pub fn text(&self) -> Vec<String> {
        self.text.lock().unwrap().clone()
    }

    pub fn speech(&self) -> Vec<String> {
        self.speech.lock().unwrap().clone()
    }
}

/// Session reading `script` from the text channel. When `with_speech` is set, speech input kinds
/// read from empty scripts and speech output is recorded separately.
pub fn session(
    script: Vec<Result<Option<String>, ChannelError>>,
    with_speech: bool,
) -> (Session, Outputs) {
    let outputs = Outputs {
        text: Arc::new(Mutex::new(Vec::new())),
        speech: Arc::new(Mutex::new(Vec::new())),
    };
    let mut inputs = InputChannels::text_only(Box::new(ScriptedInput(script.into())));
    let mut outs = OutputChannels::text_only(Box::new(RecordingOutput(outputs.text.clone())));
    if with_speech {
        inputs = inputs
            .with_prompted_speech(Box::new(ScriptedInput(VecDeque::new())))
            .with_dynamic_speech(Box::new(ScriptedInput(VecDeque::new())));
        outs = outs.with_speech(Box::new(RecordingOutput(outputs.speech.clone())));
    }
    (Session::new(inputs, outs), outputs)
}

/// Lookup that fails with NotFound for subjects in `missing` and otherwise echoes.
pub struct MockLookup {
    pub missing: Vec<String>,
    pub calls: Arc<Mutex<Vec<(String, usize)>>>,
}

impl MockLookup {
    pub fn new(missing: &[&str]) -> Self {
        Self {
            missing: missing.iter().map(|s| s.to_string()).collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl KnowledgeLookup for MockLookup {
    async fn summarize(&self, subject: &str, max_sentences: usize) -> Result<String, LookupError> {
        self.calls
            .lock()
            .unwrap()
            .push((subject.to_string(), max_sentences));
        if self.missing.iter().any(|m| m == subject) {
            return Err(LookupError::NotFound(subject.to_string()));
        }
        Ok(format!("Summary of {}.", subject))
    }
}

/// Engine that replies "echo: {text}", or fails when `fail` is set.
pub struct MockEngine {
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl MockEngine {
    pub fn new(fail: bool) -> Self {
        Self {
            fail,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConversationEngine for MockEngine {
    async fn respond(&self, text: &str) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("engine offline");
        }
        Ok(format!("echo: {}", text))
    }
}

pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Self {
        Self(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(h, min, 0)
                .unwrap(),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
