//! Byte-exact output generation.
//!
//! The emulator writes a fixed-size chunk repeatedly until the byte budget
//! is spent, flushing after every write so a supervising process observes
//! partial output in near real time. Content is opaque filler; only the
//! byte count is contractual.

use std::io::Write;

use crate::block::IndefiniteBlock;
use crate::config::{OutputConfig, TerminationMode};
use crate::error::{EmulatorError, Result};
use crate::wait;

/// Fixed size of the write chunk, in bytes.
///
/// Affects batching only; the observable byte count is exact for any value.
pub const CHUNK_SIZE: usize = 1024;

/// How the process should end after a completed run.
#[derive(Debug)]
pub enum Termination {
    /// Terminate with this exit code.
    Exit(i32),
    /// Never terminate; the caller engages the constructed block.
    Hang(IndefiniteBlock),
}

/// Builds the write chunk: the filler text truncated to [`CHUNK_SIZE`],
/// space-filled when the filler is shorter.
///
/// The buffer is obtained with `try_reserve_exact` so an allocation failure
/// surfaces as [`EmulatorError::OutOfMemory`] instead of aborting.
pub fn build_chunk(filler: &[u8]) -> Result<Vec<u8>> {
    let mut chunk = Vec::new();
    chunk
        .try_reserve_exact(CHUNK_SIZE)
        .map_err(|_| EmulatorError::OutOfMemory)?;
    let take = filler.len().min(CHUNK_SIZE);
    chunk.extend_from_slice(&filler[..take]);
    chunk.resize(CHUNK_SIZE, b' ');
    Ok(chunk)
}

/// Writes exactly `byte_length` bytes of the chunk pattern to `sink`,
/// flushing after each write.
///
/// # Errors
/// Propagates write and flush failures from the sink.
pub fn emit<W: Write>(sink: &mut W, byte_length: u64, chunk: &[u8]) -> Result<()> {
    let chunk_len = chunk.len() as u64;
    let blocks = byte_length / chunk_len;
    let remainder = (byte_length % chunk_len) as usize;

    for _ in 0..blocks {
        sink.write_all(chunk)?;
        sink.flush()?;
    }
    if remainder > 0 {
        sink.write_all(&chunk[..remainder])?;
        sink.flush()?;
    }

    tracing::debug!(byte_length, blocks, remainder, "emission complete");
    Ok(())
}

/// Output emulator: delay, byte-exact emission, then termination behavior.
#[derive(Debug)]
pub struct OutputEmulator<'a> {
    config: OutputConfig,
    filler: &'a [u8],
}

impl<'a> OutputEmulator<'a> {
    /// Creates an emulator over a validated config and the filler text.
    #[must_use]
    pub const fn new(config: OutputConfig, filler: &'a [u8]) -> Self {
        Self { config, filler }
    }

    /// Runs the emulation against the given sink and returns how the
    /// process should end.
    ///
    /// The configured delay (if any) elapses before the first byte is
    /// written. All-or-nothing on allocation failure: the chunk buffer is
    /// obtained before anything reaches the sink.
    ///
    /// # Errors
    /// Returns [`EmulatorError::OutOfMemory`] when the chunk buffer cannot
    /// be allocated, [`EmulatorError::Io`] on sink failure, and
    /// [`EmulatorError::BlockSetup`] when hang mode cannot construct its
    /// blocking mechanism.
    pub fn run<W: Write>(&self, sink: &mut W) -> Result<Termination> {
        if let Some(delay) = self.config.delay {
            wait::sleep_full(delay);
        }

        let chunk = build_chunk(self.filler)?;
        emit(sink, self.config.byte_length, &chunk)?;

        match self.config.mode {
            TerminationMode::Exit => Ok(Termination::Exit(self.config.exit_code)),
            TerminationMode::Hang => Ok(Termination::Hang(IndefiniteBlock::new()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StreamTarget;
    use proptest::prelude::*;

    const FILLER: &[u8] = b"the quick brown fox jumps over the lazy dog. ";

    fn config(byte_length: u64, mode: TerminationMode) -> OutputConfig {
        OutputConfig {
            exit_code: 0,
            byte_length,
            stream: StreamTarget::Stdout,
            mode,
            delay: None,
        }
    }

    #[test]
    fn test_chunk_is_space_padded_to_size() {
        let chunk = build_chunk(FILLER).expect("allocation");
        assert_eq!(chunk.len(), CHUNK_SIZE);
        assert_eq!(&chunk[..FILLER.len()], FILLER);
        assert!(chunk[FILLER.len()..].iter().all(|b| *b == b' '));
    }

    #[test]
    fn test_chunk_truncates_long_filler() {
        let long = vec![b'x'; CHUNK_SIZE + 100];
        let chunk = build_chunk(&long).expect("allocation");
        assert_eq!(chunk.len(), CHUNK_SIZE);
        assert!(chunk.iter().all(|b| *b == b'x'));
    }

    #[test]
    fn test_emit_exact_multiple_of_chunk() {
        let chunk = build_chunk(FILLER).expect("allocation");
        let mut sink = Vec::new();
        emit(&mut sink, 8192, &chunk).expect("emit");
        assert_eq!(sink.len(), 8192);
    }

    #[test]
    fn test_emit_remainder_is_chunk_prefix() {
        let chunk = build_chunk(FILLER).expect("allocation");
        let mut sink = Vec::new();
        emit(&mut sink, 1500, &chunk).expect("emit");
        assert_eq!(sink.len(), 1500);
        assert_eq!(&sink[CHUNK_SIZE..], &chunk[..1500 - CHUNK_SIZE]);
    }

    #[test]
    fn test_emit_below_one_chunk() {
        let chunk = build_chunk(FILLER).expect("allocation");
        let mut sink = Vec::new();
        emit(&mut sink, 10, &chunk).expect("emit");
        assert_eq!(sink, &chunk[..10]);
    }

    #[test]
    fn test_run_returns_exit_disposition() {
        let emulator = OutputEmulator::new(config(64, TerminationMode::Exit), FILLER);
        let mut sink = Vec::new();
        match emulator.run(&mut sink).expect("run") {
            Termination::Exit(code) => assert_eq!(code, 0),
            Termination::Hang(_) => panic!("expected exit disposition"),
        }
        assert_eq!(sink.len(), 64);
    }

    #[test]
    fn test_run_hang_constructs_block_after_output() {
        let emulator = OutputEmulator::new(config(32, TerminationMode::Hang), FILLER);
        let mut sink = Vec::new();
        let termination = emulator.run(&mut sink).expect("run");
        assert_eq!(sink.len(), 32);
        assert!(matches!(termination, Termination::Hang(_)));
    }

    #[test]
    fn test_runs_are_deterministic() {
        let emulator = OutputEmulator::new(config(3000, TerminationMode::Exit), FILLER);
        let mut first = Vec::new();
        let mut second = Vec::new();
        let _ = emulator.run(&mut first).expect("run");
        let _ = emulator.run(&mut second).expect("run");
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_emit_writes_exactly_requested(byte_length in 1u64..200_000) {
            let chunk = build_chunk(FILLER).expect("allocation");
            let mut sink = Vec::new();
            emit(&mut sink, byte_length, &chunk).expect("emit");
            prop_assert_eq!(sink.len() as u64, byte_length);
        }

        #[test]
        fn prop_final_partial_write_is_prefix(byte_length in 1u64..50_000) {
            let chunk = build_chunk(FILLER).expect("allocation");
            let mut sink = Vec::new();
            emit(&mut sink, byte_length, &chunk).expect("emit");
            let remainder = (byte_length % CHUNK_SIZE as u64) as usize;
            if remainder > 0 {
                let tail = &sink[sink.len() - remainder..];
                prop_assert_eq!(tail, &chunk[..remainder]);
            }
        }
    }
}
