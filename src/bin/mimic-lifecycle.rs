//! Lifecycle emulator binary.
//!
//! ```text
//! mimic-lifecycle <exit_code> <delay_ms> { sigterm | never }
//! ```
//!
//! Waits `delay_ms` milliseconds (tolerant of interruption), then exits
//! with `exit_code`. In `never` mode SIGTERM is masked for the process
//! lifetime first, so external termination requests have no effect. Usage
//! errors print the syntax line on stdout and exit 1.

use std::process;

use mimic_core::{FAILURE_EXIT_CODE, LifecycleConfig, LifecycleEmulator, telemetry};

fn main() {
    telemetry::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match LifecycleConfig::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            tracing::debug!(%err, "rejecting arguments");
            println!("{}", LifecycleConfig::SYNTAX);
            process::exit(FAILURE_EXIT_CODE);
        }
    };

    let code = LifecycleEmulator::new(config).run();
    process::exit(code);
}
