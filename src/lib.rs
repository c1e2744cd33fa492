//! mimic: deterministic child-process test doubles.
//!
//! Two small executables for exercising process supervisors, service
//! managers, and log collectors against exact, repeatable child behavior:
//!
//! - `mimic-output` - writes a configured number of bytes to stdout or
//!   stderr, optionally after a bounded delay, then exits with a configured
//!   code or hangs forever.
//! - `mimic-lifecycle` - waits a configured delay (interruption-tolerant),
//!   then exits with a configured code; optionally deaf to termination
//!   requests.
//!
//! The engine lives in [`mimic_core`]; this crate supplies the binaries
//! and the filler text they inject into it.

pub use mimic_core as core;

/// Prelude module for common imports.
pub mod prelude {
    pub use mimic_core::{
        EmulatorError, IndefiniteBlock, LifecycleConfig, LifecycleEmulator, OutputConfig,
        OutputEmulator, SignalMode, StreamTarget, Termination, TerminationMode,
    };
}

/// Filler text for generated output.
///
/// Opaque placeholder content; only the byte counts derived from it are
/// contractual. The engine pads or truncates it to its chunk size.
pub const FILLER_TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
     eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis \
     nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute \
     irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla \
     pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia \
     deserunt mollit anim id est laborum.";
