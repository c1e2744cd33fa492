//! Error types for the process probe.

/// Result type alias for probe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Failure modes when driving an emulator process.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// Spawning the emulator binary failed.
    #[error("failed to spawn emulator: {0}")]
    Spawn(#[source] std::io::Error),

    /// A captured stream was requested but not piped.
    #[error("stream not captured: {0}")]
    MissingStream(&'static str),

    /// Reading a captured stream failed.
    #[error("failed to read captured stream: {0}")]
    Read(#[source] std::io::Error),

    /// Waiting on the child failed.
    #[error("failed to wait for emulator: {0}")]
    Wait(#[source] std::io::Error),

    /// Sending a signal to the child failed.
    #[error("failed to signal emulator: {0}")]
    Signal(nix::errno::Errno),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_source() {
        let err = ProbeError::MissingStream("stdout");
        assert_eq!(err.to_string(), "stream not captured: stdout");
    }
}
