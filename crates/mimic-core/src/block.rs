//! Zero-CPU indefinite block.
//!
//! A pipe whose write end is held open but never written: a blocking
//! `read(2)` on the read end never yields data and never reports
//! end-of-stream, so the process suspends without polling and without any
//! timer that could satisfy the wait.

use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};

use nix::errno::Errno;

use crate::error::{EmulatorError, Result};

/// Handle to a constructed blocking mechanism.
///
/// Both pipe ends are owned by the value. The write end must stay open for
/// the lifetime of the block; dropping it would turn the pending read into
/// end-of-stream and end the hang.
#[derive(Debug)]
pub struct IndefiniteBlock {
    read_end: OwnedFd,
    _write_end: OwnedFd,
}

impl IndefiniteBlock {
    /// Constructs the blocking mechanism.
    ///
    /// # Errors
    /// Returns [`EmulatorError::BlockSetup`] when `pipe(2)` fails (for
    /// example on fd exhaustion). Callers must report this and exit; the
    /// contract forbids substituting a non-hanging exit.
    pub fn new() -> Result<Self> {
        let mut fds: [libc::c_int; 2] = [-1; 2];

        // SAFETY: fds points to a writable array of two c_ints.
        let rc = unsafe { libc::pipe(fds.as_mut_ptr()) };
        if rc != 0 {
            return Err(EmulatorError::BlockSetup(Errno::last()));
        }

        // SAFETY: pipe(2) succeeded, so both descriptors are valid, open,
        // and owned by nothing else.
        let (read_end, write_end) =
            unsafe { (OwnedFd::from_raw_fd(fds[0]), OwnedFd::from_raw_fd(fds[1])) };

        Ok(Self {
            read_end,
            _write_end: write_end,
        })
    }

    /// Blocks the calling thread forever.
    ///
    /// The read can only return early with `EINTR`; any such wakeup is
    /// retried. There is no exit path except forced termination of the
    /// process.
    pub fn engage(self) -> ! {
        tracing::debug!("entering indefinite block");
        let fd = self.read_end.as_raw_fd();
        let mut byte = [0u8; 1];

        loop {
            // SAFETY: fd is a valid open pipe read end owned by self; the
            // buffer is a valid writable single byte.
            let _ = unsafe { libc::read(fd, byte.as_mut_ptr().cast(), 1) };
            // Nothing is ever written and the writer is held open, so any
            // return here is a signal interruption. Re-enter the read.
        }
    }
}
