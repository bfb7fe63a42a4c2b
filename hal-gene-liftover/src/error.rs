//! Error types for hal-gene-liftover.

use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, LiftoverError>;

/// Every way a liftover run can fail.
///
/// All variants except [`LiftoverError::ProcessFailed`], [`LiftoverError::Spawn`]
/// and [`LiftoverError::Io`] are raised before any external engine is started.
#[derive(Debug, Error)]
pub enum LiftoverError {
    /// Compact region string does not match `<chrom>:<start>-<end>:<1|-1>`.
    #[error("ERROR: region '{region}' could not be parsed: {reason}")]
    MalformedRegion { region: String, reason: String },

    /// Region string parsed but describes an inverted or empty interval.
    #[error("ERROR: region '{region}' has inverted/empty interval ({start}..{end})")]
    InvalidRegion { region: String, start: u64, end: u64 },

    #[error("ERROR: invalid flank length: {0}")]
    InvalidFlank(i64),

    /// Both or neither of `--src-region` / `--src-bed-file` were supplied.
    #[error("ERROR: exactly one of --src-region or --src-bed-file is required, {0}")]
    InvalidInputSelection(&'static str),

    #[error("ERROR: cannot read BED file {}: {msg}", path.display())]
    BedRead { path: PathBuf, msg: String },

    #[error("ERROR: flanking {chrom}:{start}-{end} by {flank} bases overflows")]
    FlankOverflow {
        chrom: String,
        start: u64,
        end: u64,
        flank: u64,
    },

    #[error("ERROR: cannot start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// An external engine exited non-zero or was killed.
    #[error("ERROR: {program} failed with {status}")]
    ProcessFailed { program: String, status: ExitStatus },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl LiftoverError {
    /// True for errors caught while validating the run description.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LiftoverError::MalformedRegion { .. }
                | LiftoverError::InvalidRegion { .. }
                | LiftoverError::InvalidFlank(_)
                | LiftoverError::InvalidInputSelection(_)
        )
    }
}
