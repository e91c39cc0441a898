//! Unit test module
//!
//! Handler tests live here, separate from source files. They drive handlers through a [`Session`]
//! built from scripted input and recording output channels.
//!
//! [`Session`]: jj_core::Session

mod common;

mod clock_handler_test;
