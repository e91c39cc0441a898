//! # jj-core
//!
//! Core types and traits for the JJ assistant: command categories, [`Session`] with its input/output
//! channels, the [`CommandHandler`] trait, collaborator traits, errors, and tracing initialization.
//! Medium-agnostic; used by the classifier, router, handlers and channels.

pub mod channel;
pub mod error;
pub mod handler;
pub mod logger;
pub mod services;
pub mod session;
pub mod types;

pub use channel::{InputChannel, OutputChannel};
pub use error::{ChannelError, JjError, LookupError, Result};
pub use handler::CommandHandler;
pub use logger::init_tracing;
pub use services::{Clock, ConversationEngine, KnowledgeLookup, SystemClock};
pub use session::{InputChannels, OutputChannels, Session};
pub use types::{
    ClassifiedCommand, CommandCategory, Flow, InputEvent, InputKind, OutputKind, SessionMode,
};
