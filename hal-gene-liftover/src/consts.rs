//! Names and literals shared between the CLI and the liftover pipeline.

/// Default halLiftover executable, resolved through `PATH`.
pub const HAL_LIFTOVER_BIN: &str = "halLiftover";

/// Default pslPosTarget executable, resolved through `PATH`.
pub const PSL_POS_TARGET_BIN: &str = "pslPosTarget";

/// Query BED written inside the scratch directory.
pub const QUERY_BED_NAME: &str = "src_regions.bed";

pub const BED_NAME_PLACEHOLDER: &str = ".";

/// halLiftover requires an integer score in BED input.
pub const BED_SCORE_PLACEHOLDER: u32 = 0;

pub const BED_UNKNOWN_STRAND: char = '.';

/// Prefix of the scoped scratch directory.
pub const TMP_DIR_PREFIX: &str = "hal-gene-liftover.";
