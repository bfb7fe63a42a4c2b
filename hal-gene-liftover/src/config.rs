//! Validated description of one liftover run.

use std::path::PathBuf;

use crate::{
    cli::Args,
    error::{LiftoverError, Result},
    source::RegionSource,
};

/// Everything the pipeline needs, checked up front.
///
/// Building a `Config` performs all validation that does not need the
/// external engines: region parsing, flank sign and input selection.
/// Nothing is written to disk until a valid `Config` exists.
#[derive(Debug, Clone)]
pub struct Config {
    pub hal_file: PathBuf,
    pub src_genome: String,
    pub dest_genome: String,
    pub output_file: PathBuf,
    pub source: RegionSource,
    pub flank: u64,
    pub hal_liftover: PathBuf,
    pub psl_pos_target: PathBuf,
    pub tmp_dir: Option<PathBuf>,
}

impl TryFrom<Args> for Config {
    type Error = LiftoverError;

    fn try_from(args: Args) -> Result<Self> {
        let Args {
            hal_file,
            src_genome,
            dest_genome,
            output_file,
            src_region,
            src_bed_file,
            flank,
            hal_liftover,
            psl_pos_target,
            tmp_dir,
            ..
        } = args;

        let flank = u64::try_from(flank).map_err(|_| LiftoverError::InvalidFlank(flank))?;
        let source = RegionSource::from_inputs(src_region.as_deref(), src_bed_file.as_deref())?;

        Ok(Self {
            hal_file,
            src_genome,
            dest_genome,
            output_file,
            source,
            flank,
            hal_liftover,
            psl_pos_target,
            tmp_dir,
        })
    }
}
