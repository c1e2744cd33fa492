//! Error types for the emulation engine.
//!
//! Every failure mode maps to a specific exit code and diagnostic; nothing
//! propagates past the binary entry points.

use nix::errno::Errno;

/// Exit code shared by usage, resource, and mechanism failures.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EmulatorError>;

/// Failure modes of the emulation engine.
#[derive(Debug, thiserror::Error)]
pub enum EmulatorError {
    /// Arguments did not satisfy the caller contract.
    ///
    /// The reason is for diagnostics only; callers print the fixed
    /// one-line syntax message, not this text.
    #[error("usage error: {0}")]
    Usage(String),

    /// The output chunk buffer could not be allocated.
    #[error("Out of memory")]
    OutOfMemory,

    /// The indefinite-block mechanism could not be constructed.
    #[error("cannot set up blocking pipe: {0}")]
    BlockSetup(Errno),

    /// Writing to the selected stream failed.
    #[error("stream write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl EmulatorError {
    /// Creates a usage error.
    #[must_use]
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Returns true if this error is a violation of the argument contract.
    ///
    /// Usage errors print the syntax line on stdout; everything else
    /// reports on stderr.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }

    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_display() {
        let err = EmulatorError::usage("byte length must not be zero");
        assert_eq!(
            err.to_string(),
            "usage error: byte length must not be zero"
        );
        assert!(err.is_usage());
    }

    #[test]
    fn test_out_of_memory_display() {
        // The binaries prefix this with "Error: " on stderr.
        assert_eq!(EmulatorError::OutOfMemory.to_string(), "Out of memory");
        assert!(!EmulatorError::OutOfMemory.is_usage());
    }

    #[test]
    fn test_all_errors_exit_one() {
        assert_eq!(EmulatorError::usage("x").exit_code(), 1);
        assert_eq!(EmulatorError::OutOfMemory.exit_code(), 1);
        assert_eq!(EmulatorError::BlockSetup(Errno::EMFILE).exit_code(), 1);
    }
}
