//! Lifecycle emulation: optional signal disposition, timed wait, exit code.

use crate::config::{LifecycleConfig, SignalMode};
use crate::signal;
use crate::wait;

/// Lifecycle emulator: wait a configured delay, then exit with a
/// configured code, optionally deaf to termination requests.
#[derive(Debug)]
pub struct LifecycleEmulator {
    config: LifecycleConfig,
}

impl LifecycleEmulator {
    /// Creates an emulator over a validated config.
    #[must_use]
    pub const fn new(config: LifecycleConfig) -> Self {
        Self { config }
    }

    /// Runs the emulation and returns the exit code for the process.
    ///
    /// In unterminable mode the SIGTERM mask is installed before the wait
    /// begins. An install failure is surfaced as a warning on stderr and
    /// the run continues; the caller is explicitly told the signal-proof
    /// guarantee was not established. In terminable mode a termination
    /// request pre-empts the wait through the default disposition, in
    /// which case this function never returns.
    pub fn run(&self) -> i32 {
        if self.config.signal_mode == SignalMode::Unterminable {
            if let Err(errno) = signal::block_termination() {
                eprintln!("Warning: failed to block termination signal: {errno}");
                tracing::warn!(%errno, "continuing without the unterminable guarantee");
            }
        }

        if !self.config.delay.is_zero() {
            tracing::debug!(
                delay = %humantime::format_duration(self.config.delay),
                "waiting before exit"
            );
            wait::sleep_full(self.config.delay);
        }

        self.config.exit_code
    }
}
