//! Synchronous process probe.
//!
//! Spawns an emulator binary with piped streams and observes it the way a
//! supervisor under test would: bounded waits, signal injection, byte-count
//! capture, and forced cleanup for intentionally hanging children.

use std::io::Read;
use std::os::unix::process::ExitStatusExt;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;

use crate::error::{ProbeError, Result};

/// Poll interval for bounded waits.
const WAIT_POLL: Duration = Duration::from_millis(10);

/// How an observed emulator run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Exited on its own with this code.
    Code(i32),
    /// Ended by this signal number.
    Signal(i32),
}

impl ExitOutcome {
    /// Classifies an OS exit status.
    #[must_use]
    pub fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => Self::Code(code),
            // On Unix a missing code means signal death.
            None => Self::Signal(status.signal().unwrap_or_default()),
        }
    }
}

/// Everything captured from a run-to-completion probe.
#[derive(Debug)]
pub struct CapturedRun {
    /// How the process ended.
    pub outcome: ExitOutcome,
    /// Full stdout capture.
    pub stdout: Vec<u8>,
    /// Full stderr capture.
    pub stderr: Vec<u8>,
    /// Wall-clock time from spawn to exit.
    pub elapsed: Duration,
}

/// A spawned emulator process under observation.
#[derive(Debug)]
pub struct EmulatorProc {
    child: Child,
    started: Instant,
}

impl EmulatorProc {
    /// Spawns an emulator binary with both streams piped.
    ///
    /// # Errors
    /// Returns [`ProbeError::Spawn`] when the binary cannot be started.
    pub fn spawn<I, S>(binary: &str, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let child = Command::new(binary)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(ProbeError::Spawn)?;
        tracing::debug!(pid = child.id(), binary, "spawned emulator");
        Ok(Self {
            child,
            started: Instant::now(),
        })
    }

    /// Spawns, waits for exit, and captures both streams in full.
    ///
    /// Only suitable for runs that terminate on their own; a hang-mode
    /// child would block this forever.
    ///
    /// # Errors
    /// Returns spawn or wait failures.
    pub fn run_to_completion<I, S>(binary: &str, args: I) -> Result<CapturedRun>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let started = Instant::now();
        let child = Command::new(binary)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(ProbeError::Spawn)?;
        // wait_with_output drains both pipes while waiting, so arbitrarily
        // large emissions cannot deadlock the probe.
        let output = child.wait_with_output().map_err(ProbeError::Wait)?;
        Ok(CapturedRun {
            outcome: ExitOutcome::from_status(output.status),
            stdout: output.stdout,
            stderr: output.stderr,
            elapsed: started.elapsed(),
        })
    }

    /// Process id of the child.
    #[must_use]
    pub fn pid(&self) -> u32 {
        self.child.id()
    }

    /// Wall-clock time since the spawn.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Reads exactly `count` bytes from the child's stdout.
    ///
    /// Used against hang-mode children, where end-of-stream never comes
    /// and a full capture would block forever.
    ///
    /// # Errors
    /// Returns [`ProbeError::MissingStream`] when stdout was not piped and
    /// [`ProbeError::Read`] on a short or failed read.
    pub fn read_stdout_exact(&mut self, count: usize) -> Result<Vec<u8>> {
        let stdout = self
            .child
            .stdout
            .as_mut()
            .ok_or(ProbeError::MissingStream("stdout"))?;
        let mut buf = vec![0u8; count];
        stdout.read_exact(&mut buf).map_err(ProbeError::Read)?;
        Ok(buf)
    }

    /// Polls for exit for up to `timeout`.
    ///
    /// Returns `Some` with the outcome when the child exited within the
    /// window, `None` when it is still running.
    ///
    /// # Errors
    /// Returns [`ProbeError::Wait`] when the status poll itself fails.
    pub fn wait_timeout(&mut self, timeout: Duration) -> Result<Option<ExitOutcome>> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(status) = self.child.try_wait().map_err(ProbeError::Wait)? {
                return Ok(Some(ExitOutcome::from_status(status)));
            }
            if Instant::now() >= deadline {
                return Ok(None);
            }
            std::thread::sleep(WAIT_POLL);
        }
    }

    /// Sends SIGTERM to the child - the polite termination request.
    ///
    /// # Errors
    /// Returns [`ProbeError::Signal`] when `kill(2)` fails.
    pub fn send_term(&self) -> Result<()> {
        self.send_signal(Signal::SIGTERM)
    }

    /// Sends SIGKILL to the child - forced termination.
    ///
    /// # Errors
    /// Returns [`ProbeError::Signal`] when `kill(2)` fails.
    pub fn send_kill(&self) -> Result<()> {
        self.send_signal(Signal::SIGKILL)
    }

    /// Sends an arbitrary signal to the child.
    ///
    /// # Errors
    /// Returns [`ProbeError::Signal`] when `kill(2)` fails.
    pub fn send_signal(&self, signal: Signal) -> Result<()> {
        #[allow(clippy::cast_possible_wrap)] // PID from u32 fits in i32 range
        kill(Pid::from_raw(self.child.id() as i32), signal).map_err(ProbeError::Signal)?;
        tracing::debug!(pid = self.child.id(), signal = signal.as_str(), "signalled emulator");
        Ok(())
    }

    /// Forcibly kills the child and reaps it.
    ///
    /// The only way to end a hang-mode or unterminable child; ignores the
    /// race where the child already exited.
    pub fn kill_and_reap(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

impl Drop for EmulatorProc {
    fn drop(&mut self) {
        // Leave no stray children behind a failing test.
        if matches!(self.child.try_wait(), Ok(None) | Err(_)) {
            self.kill_and_reap();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_failure_is_reported() {
        let err = EmulatorProc::spawn("/nonexistent/mimic-binary", ["0"])
            .expect_err("spawn must fail");
        assert!(matches!(err, ProbeError::Spawn(_)));
    }

    #[test]
    fn test_outcome_classifies_exit_code() {
        // `true` exits 0 without signals.
        let run = EmulatorProc::run_to_completion("true", std::iter::empty::<&str>())
            .expect("spawn true");
        assert_eq!(run.outcome, ExitOutcome::Code(0));
    }

    #[test]
    fn test_wait_timeout_observes_running_child() {
        let mut proc =
            EmulatorProc::spawn("sleep", ["5"]).expect("spawn sleep");
        let outcome = proc
            .wait_timeout(Duration::from_millis(50))
            .expect("poll status");
        assert!(outcome.is_none(), "child should still be running");
        proc.kill_and_reap();
    }

    #[test]
    fn test_signal_death_is_classified() {
        let mut proc =
            EmulatorProc::spawn("sleep", ["5"]).expect("spawn sleep");
        proc.send_term().expect("send SIGTERM");
        let outcome = proc
            .wait_timeout(Duration::from_secs(2))
            .expect("poll status")
            .expect("child should die from SIGTERM");
        assert_eq!(outcome, ExitOutcome::Signal(libc_sigterm()));
    }

    fn libc_sigterm() -> i32 {
        Signal::SIGTERM as i32
    }
}
