//! Output emulator binary.
//!
//! ```text
//! mimic-output <exit_code> <byte_length> { stdout | stderr } { exit | hang } [ delay_ms ]
//! ```
//!
//! Writes exactly `byte_length` bytes of filler to the selected stream,
//! then exits with `exit_code` or hangs forever. Usage errors print the
//! syntax line on stdout and exit 1; resource and mechanism failures
//! report on stderr and exit 1.

use std::io::Write;
use std::process;

use mimic_core::{
    FAILURE_EXIT_CODE, OutputConfig, OutputEmulator, StreamTarget, Termination, telemetry,
};

fn main() {
    telemetry::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match OutputConfig::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            tracing::debug!(%err, "rejecting arguments");
            println!("{}", OutputConfig::SYNTAX);
            process::exit(FAILURE_EXIT_CODE);
        }
    };

    let emulator = OutputEmulator::new(config, mimic::FILLER_TEXT.as_bytes());
    let outcome = match config.stream {
        StreamTarget::Stdout => emulator.run(&mut std::io::stdout().lock()),
        StreamTarget::Stderr => emulator.run(&mut std::io::stderr().lock()),
    };

    match outcome {
        Ok(Termination::Exit(code)) => process::exit(code),
        Ok(Termination::Hang(block)) => block.engage(),
        Err(err) => {
            // Keep the stream contract: diagnostics go to stderr only.
            let _ = writeln!(std::io::stderr(), "Error: {err}");
            process::exit(err.exit_code());
        }
    }
}
