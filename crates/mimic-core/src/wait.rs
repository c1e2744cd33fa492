//! Restart-safe timed wait.
//!
//! `nanosleep(2)` returns early with `EINTR` when a handled signal arrives.
//! The countdown here is anchored to a monotonic deadline taken on entry, so
//! every retry sleeps only for the portion that has not yet elapsed and
//! repeated interruptions cannot accumulate drift.

use std::time::{Duration, Instant};

use nix::errno::Errno;

/// Sleeps for the full requested duration, resuming across signal
/// interruptions.
///
/// Millisecond-granularity input is the public unit of the emulators; the
/// internal representation is nanoseconds. A zero duration returns
/// immediately. If the process's signal disposition lets a termination
/// signal through, the signal ends the process and this function never
/// returns - that is the terminable lifecycle contract, not an error.
pub fn sleep_full(total: Duration) {
    let mut remaining = total;
    let mut interruptions: u32 = 0;

    while !remaining.is_zero() {
        let slice_start = Instant::now();
        if nanosleep(remaining) {
            break;
        }

        // Shrink by exactly the elapsed portion; never restart from the
        // original duration.
        remaining = remaining.saturating_sub(slice_start.elapsed());
        interruptions += 1;
        tracing::trace!(
            remaining = %humantime::format_duration(remaining),
            interruptions,
            "sleep interrupted, resuming"
        );
    }

    if interruptions > 0 {
        tracing::debug!(
            total = %humantime::format_duration(total),
            interruptions,
            "completed interrupted wait"
        );
    }
}

/// Single `nanosleep(2)` call. Returns false when interrupted by a signal.
fn nanosleep(duration: Duration) -> bool {
    let request = libc::timespec {
        tv_sec: duration.as_secs() as libc::time_t,
        tv_nsec: duration.subsec_nanos() as libc::c_long,
    };

    // SAFETY: request points to a valid timespec for the duration of the
    // call; the remainder pointer may be null, the residual is recomputed
    // from the monotonic deadline instead.
    let rc = unsafe { libc::nanosleep(&request, std::ptr::null_mut()) };
    if rc == 0 {
        return true;
    }

    // EINTR is the only failure nanosleep can report for a valid request.
    debug_assert_eq!(Errno::last(), Errno::EINTR);
    false
}
