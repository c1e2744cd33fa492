//! Tracing initialization for the emulator binaries.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "MIMIC_LOG";

/// Installs the global tracing subscriber.
///
/// The filter comes from `MIMIC_LOG` and defaults to `off`: the emulators'
/// streams carry a byte-exact contract, so diagnostics are opt-in and are
/// pinned to stderr when enabled.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
