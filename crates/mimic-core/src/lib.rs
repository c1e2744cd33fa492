// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # mimic-core
//!
//! Behavior-emulation engine for the `mimic` test-double processes.
//!
//! Process supervisors, service managers, and log collectors are tested
//! against children that behave in exact, repeatable ways. This crate
//! provides the pieces those children are built from:
//!
//! - [`OutputConfig`] / [`LifecycleConfig`] - run configuration parsed once
//!   from process arguments and never mutated
//! - [`OutputEmulator`] - byte-exact output under a byte budget, then exit
//!   or hang
//! - [`LifecycleEmulator`] - interruption-tolerant delay, then exit,
//!   optionally deaf to termination requests
//! - [`wait::sleep_full`] - restart-safe timed wait (monotonic countdown)
//! - [`IndefiniteBlock`] - zero-CPU, timer-proof indefinite suspension
//!
//! The engine is single-threaded and synchronous by design: the only
//! external events are OS signals, and the primitives here resume across
//! them rather than abort.

#![warn(missing_docs)]

pub mod block;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod output;
pub mod signal;
pub mod telemetry;
pub mod wait;

pub use block::IndefiniteBlock;
pub use config::{
    DELAY_RANGE_MS, LifecycleConfig, OutputConfig, SignalMode, StreamTarget, TerminationMode,
};
pub use error::{EmulatorError, FAILURE_EXIT_CODE, Result};
pub use lifecycle::LifecycleEmulator;
pub use output::{CHUNK_SIZE, OutputEmulator, Termination};
