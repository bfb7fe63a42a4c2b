//! lift genomic regions between genomes of a HAL alignment
//!
//! Thin driver around `halLiftover` and `pslPosTarget`: a region given on
//! the command line (or every record of a BED file) is padded with an
//! optional flank, written to a scratch BED file and lifted from the source
//! to the destination genome. The PSL produced by halLiftover is piped
//! straight into pslPosTarget, which writes the output file.
//!
//! # Usage
//!
//! ```bash
//! Usage: hal-gene-liftover [OPTIONS] <--src-region <SRC_REGION>|--src-bed-file <SRC_BED_FILE>> <HAL_FILE> <SRC_GENOME> <DEST_GENOME> <OUTPUT_FILE>
//!
//! Arguments:
//!   <HAL_FILE>     Input HAL file
//!   <SRC_GENOME>   Source genome name
//!   <DEST_GENOME>  Destination genome name
//!   <OUTPUT_FILE>  Output PSL file
//!
//! Options:
//!       --src-region <SRC_REGION>          Region to liftover, as <chrom>:<start>-<end>:<1|-1> (1-based, inclusive)
//!       --src-bed-file <SRC_BED_FILE>      BED file containing regions to liftover
//!       --flank <FLANK>                    Requested length of upstream/downstream flanking regions to include in query [default: 0]
//!       --hal-liftover <HAL_LIFTOVER>      halLiftover executable [default: halLiftover]
//!       --psl-pos-target <PSL_POS_TARGET>  pslPosTarget executable [default: pslPosTarget]
//!       --tmp-dir <TMP_DIR>                Parent directory for the scratch directory [default: system temp dir]
//!   -L, --level <LEVEL>                    Logging verbosity level [default: info]
//!   -h, --help                             Print help
//!   -V, --version                          Print version
//! ```
//!
//! # Example
//!
//! ```bash
//! # GRCh38 -> CHM13 liftover of the human INS gene with 5 kb flanks
//! hal-gene-liftover --src-region chr11:2159779-2161221:-1 \
//!     --flank 5000 input.hal GRCh38 CHM13 output.psl
//! ```

pub mod bed;
pub mod cli;
pub mod config;
pub mod consts;
pub mod core;
pub mod error;
pub mod region;
pub mod source;

pub use cli::Args;
pub use config::Config;
pub use crate::core::{liftover, run};
pub use error::{LiftoverError, Result};
pub use region::{Region, Strand};
pub use source::{Interval, RegionSource};
