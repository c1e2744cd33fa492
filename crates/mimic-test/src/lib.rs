// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
// Assertion helpers exist to panic inside test suites.
#![allow(clippy::panic, clippy::missing_panics_doc)]

//! # mimic-test
//!
//! Process-probe harness for driving the `mimic` emulator binaries the way
//! a supervisor under test would: spawn with piped streams, observe exits
//! within bounded windows, inject signals, and force cleanup of children
//! that hang on purpose.

#![warn(missing_docs)]

pub mod assertions;
pub mod error;
pub mod harness;

pub use assertions::{assert_exited_with, assert_killed_by, assert_waited_at_least};
pub use error::{ProbeError, Result};
pub use harness::{CapturedRun, EmulatorProc, ExitOutcome};
