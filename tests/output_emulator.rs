//! Integration tests for the `mimic-output` binary.

use std::time::Duration;

use mimic_test::{EmulatorProc, ExitOutcome, assert_exited_with, assert_waited_at_least};

const BIN: &str = env!("CARGO_BIN_EXE_mimic-output");

fn run(args: &[&str]) -> mimic_test::CapturedRun {
    EmulatorProc::run_to_completion(BIN, args).expect("emulator run")
}

#[test]
fn writes_exact_byte_count_to_stdout() {
    let captured = run(&["0", "8192", "stdout", "exit"]);
    assert_exited_with(captured.outcome, 0);
    assert_eq!(captured.stdout.len(), 8192);
    assert!(captured.stderr.is_empty());
}

#[test]
fn writes_exact_byte_count_to_stderr() {
    let captured = run(&["0", "2048", "stderr", "exit"]);
    assert_exited_with(captured.outcome, 0);
    assert_eq!(captured.stderr.len(), 2048);
    assert!(captured.stdout.is_empty());
}

#[test]
fn partial_final_chunk_repeats_the_pattern() {
    // 1500 = one full 1024-byte chunk plus a 476-byte prefix of the same chunk.
    let captured = run(&["0", "1500", "stdout", "exit"]);
    assert_eq!(captured.stdout.len(), 1500);
    assert_eq!(&captured.stdout[1024..], &captured.stdout[..476]);
}

#[test]
fn below_one_chunk_is_exact() {
    let captured = run(&["0", "10", "stdout", "exit"]);
    assert_eq!(captured.stdout.len(), 10);
}

#[test]
fn large_output_is_exact() {
    let captured = run(&["0", "1048576", "stdout", "exit"]);
    assert_exited_with(captured.outcome, 0);
    assert_eq!(captured.stdout.len(), 1_048_576);
}

#[test]
fn exit_code_passes_through() {
    let captured = run(&["42", "16", "stdout", "exit"]);
    assert_exited_with(captured.outcome, 42);
}

#[test]
fn identical_arguments_produce_identical_bytes() {
    let first = run(&["0", "3000", "stdout", "exit"]);
    let second = run(&["0", "3000", "stdout", "exit"]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn zero_length_is_a_usage_error() {
    let captured = run(&["3", "0", "stdout", "exit"]);
    assert_exited_with(captured.outcome, 1);
    let text = String::from_utf8_lossy(&captured.stdout);
    assert!(text.starts_with("Syntax:"), "got: {text}");
    assert!(captured.stderr.is_empty());
}

#[test]
fn usage_errors_reject_partially_valid_arguments() {
    for args in [
        &["0"][..],
        &["0", "12", "stdout"][..],
        &["0", "12x", "stdout", "exit"][..],
        &["zero", "12", "stdout", "exit"][..],
        &["0", "12", "Stdout", "exit"][..],
        &["0", "12", "stdout", "HANG"][..],
        &["0", "12", "stdout", "exit", "0"][..],
        &["0", "12", "stdout", "exit", "120001"][..],
        &["0", "12", "stdout", "exit", "50x"][..],
        &["0", "12", "stdout", "exit", "5", "extra"][..],
    ] {
        let captured = run(args);
        assert_exited_with(captured.outcome, 1);
        assert!(
            String::from_utf8_lossy(&captured.stdout).starts_with("Syntax:"),
            "no syntax line for {args:?}"
        );
    }
}

#[test]
fn delay_defers_completion() {
    let captured = run(&["0", "32", "stdout", "exit", "300"]);
    assert_exited_with(captured.outcome, 0);
    assert_eq!(captured.stdout.len(), 32);
    assert_waited_at_least(captured.elapsed, Duration::from_millis(300));
}

#[test]
fn hang_mode_outlives_the_observation_window() {
    let mut proc =
        EmulatorProc::spawn(BIN, ["0", "64", "stdout", "hang"]).expect("spawn emulator");

    // The full byte budget arrives even though the process never exits.
    let bytes = proc.read_stdout_exact(64).expect("read emitted bytes");
    assert_eq!(bytes.len(), 64);

    let outcome = proc
        .wait_timeout(Duration::from_millis(400))
        .expect("poll status");
    assert!(outcome.is_none(), "hang mode must not terminate on its own");

    proc.kill_and_reap();
}

#[test]
fn hang_mode_dies_only_from_forced_termination() {
    let mut proc =
        EmulatorProc::spawn(BIN, ["7", "32", "stdout", "hang"]).expect("spawn emulator");
    let _ = proc.read_stdout_exact(32).expect("read emitted bytes");

    proc.send_kill().expect("send SIGKILL");
    let outcome = proc
        .wait_timeout(Duration::from_secs(2))
        .expect("poll status")
        .expect("SIGKILL must end the hang");
    assert_eq!(outcome, ExitOutcome::Signal(9));
}
