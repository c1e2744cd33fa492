//! Run configuration parsed from process arguments.
//!
//! A config is constructed exactly once at startup, consumed synchronously
//! by the engine, and never mutated. Parsing follows the caller contract:
//! every numeric token must fully consume its text, enumerated tokens match
//! exactly (case-sensitive), and the optional delay is only recognized by
//! the output emulator within its bounded range.

use std::time::Duration;

use crate::error::{EmulatorError, Result};

/// Inclusive bounds for the optional pre-output delay, in milliseconds.
pub const DELAY_RANGE_MS: std::ops::RangeInclusive<u64> = 1..=120_000;

/// Target stream for generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamTarget {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

impl StreamTarget {
    /// Parses a command-line token. Tokens are case-sensitive.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "stdout" => Some(Self::Stdout),
            "stderr" => Some(Self::Stderr),
            _ => None,
        }
    }

    /// Returns the command-line token for this target.
    #[must_use]
    pub const fn as_token(&self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

/// What the output emulator does once its byte budget is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationMode {
    /// Terminate the process with the configured exit code.
    Exit,
    /// Block forever; the process must be killed externally.
    Hang,
}

impl TerminationMode {
    /// Parses a command-line token. Tokens are case-sensitive.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "exit" => Some(Self::Exit),
            "hang" => Some(Self::Hang),
            _ => None,
        }
    }

    /// Returns the command-line token for this mode.
    #[must_use]
    pub const fn as_token(&self) -> &'static str {
        match self {
            Self::Exit => "exit",
            Self::Hang => "hang",
        }
    }
}

/// Disposition of external termination requests during the lifecycle wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalMode {
    /// Default SIGTERM handling; a termination request pre-empts the wait.
    Terminable,
    /// SIGTERM is masked for the process lifetime; termination requests
    /// have no effect on the wait or the exit code.
    Unterminable,
}

impl SignalMode {
    /// Parses a command-line token. Tokens are case-sensitive.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "sigterm" => Some(Self::Terminable),
            "never" => Some(Self::Unterminable),
            _ => None,
        }
    }

    /// Returns the command-line token for this mode.
    #[must_use]
    pub const fn as_token(&self) -> &'static str {
        match self {
            Self::Terminable => "sigterm",
            Self::Unterminable => "never",
        }
    }
}

/// Validated configuration for the output emulator.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// Exit code used when `mode` is [`TerminationMode::Exit`].
    pub exit_code: i32,
    /// Exact number of bytes to write. Always nonzero after validation.
    pub byte_length: u64,
    /// Stream the bytes go to.
    pub stream: StreamTarget,
    /// Termination behavior after the byte budget is spent.
    pub mode: TerminationMode,
    /// Optional delay executed before any output is written.
    pub delay: Option<Duration>,
}

impl OutputConfig {
    /// One-line syntax message printed on stdout for usage errors.
    pub const SYNTAX: &'static str = "Syntax: mimic-output <exit_code> <byte_length> \
         { stdout | stderr } { exit | hang } [ delay_ms (1 - 120000) ]";

    /// Parses the positional arguments (without the program name).
    ///
    /// # Errors
    /// Returns [`EmulatorError::Usage`] on wrong arity, an unparsable or
    /// partially consumed numeric token, an unrecognized enum token, a zero
    /// byte length, or an out-of-range delay.
    pub fn from_args(args: &[String]) -> Result<Self> {
        if args.len() != 4 && args.len() != 5 {
            return Err(EmulatorError::usage(format!(
                "expected 4 or 5 arguments, got {}",
                args.len()
            )));
        }

        let exit_code = parse_number::<i32>(&args[0], "exit code")?;
        let byte_length = parse_number::<u64>(&args[1], "byte length")?;
        if byte_length == 0 {
            return Err(EmulatorError::usage("byte length must not be zero"));
        }

        let stream = StreamTarget::from_token(&args[2])
            .ok_or_else(|| EmulatorError::usage(format!("unknown stream '{}'", args[2])))?;
        let mode = TerminationMode::from_token(&args[3])
            .ok_or_else(|| EmulatorError::usage(format!("unknown mode '{}'", args[3])))?;

        let delay = match args.get(4) {
            Some(token) => {
                let millis = parse_number::<u64>(token, "delay")?;
                if !DELAY_RANGE_MS.contains(&millis) {
                    return Err(EmulatorError::usage(format!(
                        "delay {millis} outside {} - {}",
                        DELAY_RANGE_MS.start(),
                        DELAY_RANGE_MS.end()
                    )));
                }
                Some(Duration::from_millis(millis))
            }
            None => None,
        };

        let config = Self {
            exit_code,
            byte_length,
            stream,
            mode,
            delay,
        };
        tracing::debug!(
            exit_code,
            byte_length,
            stream = stream.as_token(),
            mode = mode.as_token(),
            delay = ?config.delay,
            "accepted output config"
        );
        Ok(config)
    }
}

/// Validated configuration for the lifecycle emulator.
#[derive(Debug, Clone, Copy)]
pub struct LifecycleConfig {
    /// Exit code used after the wait completes.
    pub exit_code: i32,
    /// Wait duration. Zero means no waiting; the upper bound is open.
    pub delay: Duration,
    /// Disposition of external termination requests.
    pub signal_mode: SignalMode,
}

impl LifecycleConfig {
    /// One-line syntax message printed on stdout for usage errors.
    pub const SYNTAX: &'static str =
        "Syntax: mimic-lifecycle <exit_code> <delay_ms> { sigterm | never }";

    /// Parses the positional arguments (without the program name).
    ///
    /// # Errors
    /// Returns [`EmulatorError::Usage`] on wrong arity, an unparsable or
    /// partially consumed numeric token, or an unrecognized mode token.
    pub fn from_args(args: &[String]) -> Result<Self> {
        if args.len() != 3 {
            return Err(EmulatorError::usage(format!(
                "expected 3 arguments, got {}",
                args.len()
            )));
        }

        let exit_code = parse_number::<i32>(&args[0], "exit code")?;
        let delay_ms = parse_number::<u64>(&args[1], "delay")?;
        let signal_mode = SignalMode::from_token(&args[2])
            .ok_or_else(|| EmulatorError::usage(format!("unknown signal mode '{}'", args[2])))?;

        let config = Self {
            exit_code,
            delay: Duration::from_millis(delay_ms),
            signal_mode,
        };
        tracing::debug!(
            exit_code,
            delay = %humantime::format_duration(config.delay),
            signal_mode = signal_mode.as_token(),
            "accepted lifecycle config"
        );
        Ok(config)
    }
}

/// Parses a numeric token, rejecting anything that does not fully consume
/// the text ("12x" is invalid, as is a stray sign or whitespace).
fn parse_number<T: std::str::FromStr>(token: &str, what: &str) -> Result<T> {
    token
        .parse::<T>()
        .map_err(|_| EmulatorError::usage(format!("invalid {what} '{token}'")))
}
