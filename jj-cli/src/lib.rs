//! # jj-cli
//!
//! Config loading, component assembly and the REPL runner behind the `jj` binary.

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;

pub use cli::{load_env, Cli};
pub use config::AssistantConfig;
pub use runner::{run_assistant, run_with_console};
