//! Command-line surface of hal-gene-liftover.

use clap::{ArgGroup, Parser};
use log::Level;

use std::{fmt, path::PathBuf};

use crate::consts::{HAL_LIFTOVER_BIN, PSL_POS_TARGET_BIN};

#[derive(Parser, Debug, Clone)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .multiple(false)
        .args(["src_region", "src_bed_file"])
))]
pub struct Args {
    /// Input HAL file
    pub hal_file: PathBuf,

    /// Source genome name
    pub src_genome: String,

    /// Destination genome name
    pub dest_genome: String,

    /// Output PSL file
    pub output_file: PathBuf,

    /// Region to liftover, as <chrom>:<start>-<end>:<1|-1> (1-based, inclusive)
    #[arg(long)]
    pub src_region: Option<String>,

    /// BED file containing regions to liftover
    #[arg(long)]
    pub src_bed_file: Option<PathBuf>,

    /// Requested length of upstream/downstream flanking regions to include in query
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub flank: i64,

    /// halLiftover executable
    #[arg(long, default_value = HAL_LIFTOVER_BIN)]
    pub hal_liftover: PathBuf,

    /// pslPosTarget executable
    #[arg(long, default_value = PSL_POS_TARGET_BIN)]
    pub psl_pos_target: PathBuf,

    /// Parent directory for the scratch directory [default: system temp dir]
    #[arg(long)]
    pub tmp_dir: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(short = 'L', long, default_value = "info")]
    pub level: Level,
}

/// Formats the Args struct as a comma-separated string of key=value pairs.
///
/// # Example
///
/// ```rust,ignore
/// use hal_gene_liftover::Args;
/// let args = Args::parse();
/// println!("{}", args);
/// ```
impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hal_file={}, src_genome={}, dest_genome={}, output_file={}, src_region={}, src_bed_file={}, flank={}, hal_liftover={}, psl_pos_target={}, tmp_dir={}, level={}",
            self.hal_file.display(),
            self.src_genome,
            self.dest_genome,
            self.output_file.display(),
            self.src_region.as_deref().unwrap_or("-"),
            self.src_bed_file
                .as_ref()
                .map_or("-".into(), |p| p.display().to_string()),
            self.flank,
            self.hal_liftover.display(),
            self.psl_pos_target.display(),
            self.tmp_dir
                .as_ref()
                .map_or("-".into(), |p| p.display().to_string()),
            self.level,
        )
    }
}
