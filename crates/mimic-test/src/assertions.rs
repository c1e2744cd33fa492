//! Outcome assertions for emulator probes.

use std::time::Duration;

use crate::harness::ExitOutcome;

/// Asserts that a run exited on its own with the given code.
///
/// # Panics
/// Panics with a diagnostic when the outcome differs.
pub fn assert_exited_with(outcome: ExitOutcome, code: i32) {
    assert_eq!(
        outcome,
        ExitOutcome::Code(code),
        "expected clean exit with code {code}, got {outcome:?}"
    );
}

/// Asserts that a run was ended by the given signal number.
///
/// # Panics
/// Panics with a diagnostic when the outcome differs.
pub fn assert_killed_by(outcome: ExitOutcome, signal: i32) {
    assert_eq!(
        outcome,
        ExitOutcome::Signal(signal),
        "expected death by signal {signal}, got {outcome:?}"
    );
}

/// Asserts that a wait completed no earlier than its configured floor.
///
/// # Panics
/// Panics when the elapsed time undercuts the floor.
pub fn assert_waited_at_least(elapsed: Duration, floor: Duration) {
    assert!(
        elapsed >= floor,
        "run completed in {elapsed:?}, before the {floor:?} floor"
    );
}
