//! # Command router
//!
//! [`HandlerTable`] binds every [`jj_core::CommandCategory`] to exactly one handler, and [`Router`]
//! runs the session loop: read a line from the current input channel, classify it, dispatch it, stop
//! when a handler says so or input closes, then say goodbye.

mod router;
mod table;

pub use router::{Router, DEFAULT_FAREWELL};
pub use table::HandlerTable;

// Integration tests live in tests/router_test.rs
