//! Process-wide signal disposition for unterminable mode.
//!
//! The mask is installed once, before any wait begins, and persists for the
//! remainder of the process's life. There is no uninstall path.

use nix::errno::Errno;
use nix::sys::signal::{SigSet, SigmaskHow, Signal, sigprocmask};

/// Masks SIGTERM for the whole process so external termination requests
/// have no effect and cannot interrupt or shorten a wait.
///
/// # Errors
/// Returns the errno when `sigprocmask(2)` fails. The caller surfaces this
/// as a warning and continues without the guarantee; it must not abort the
/// run.
pub fn block_termination() -> Result<(), Errno> {
    let mut mask = SigSet::empty();
    mask.add(Signal::SIGTERM);
    sigprocmask(SigmaskHow::SIG_BLOCK, Some(&mask), None)?;
    tracing::debug!(signal = Signal::SIGTERM.as_str(), "termination signal masked for process lifetime");
    Ok(())
}
