//! Query intervals from either a single compact region or a BED file.

use genepred::{Bed3, Bed4, Bed5, Bed6, GenePred, Reader, bed::BedFormat};
use log::{debug, info};

use std::path::{Path, PathBuf};

use crate::{
    error::{LiftoverError, Result},
    region::{Region, Strand},
};

/// One query interval, 0-based half-open.
///
/// Unlike [`Region`], intervals read from a BED file are passed through
/// as the reader produced them; a missing or unknown strand is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
    pub strand: Option<Strand>,
}

impl From<&Region> for Interval {
    fn from(region: &Region) -> Self {
        Self {
            chrom: region.chrom().to_string(),
            start: region.start(),
            end: region.end(),
            strand: Some(region.strand()),
        }
    }
}

impl From<GenePred> for Interval {
    fn from(record: GenePred) -> Self {
        let strand = match &record.strand {
            Some(genepred::Strand::Forward) => Some(Strand::Forward),
            Some(genepred::Strand::Reverse) => Some(Strand::Reverse),
            Some(genepred::Strand::Unknown) | None => None,
        };

        Self {
            chrom: String::from_utf8_lossy(&record.chrom).into_owned(),
            start: u64::from(record.start),
            end: u64::from(record.end),
            strand,
        }
    }
}

/// Where the query regions come from.
///
/// # Variants
///
/// - `Region`: a single region given on the command line
/// - `BedFile`: a BED3 to BED12 file, optionally gzip/zstd/bzip2 compressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionSource {
    Region(Region),
    BedFile(PathBuf),
}

impl RegionSource {
    /// Resolves the two mutually exclusive inputs into a source.
    ///
    /// A region string is parsed eagerly so malformed or inverted regions
    /// are reported before anything touches the filesystem.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use hal_gene_liftover::RegionSource;
    ///
    /// let source = RegionSource::from_inputs(Some("chr1:1-10:1"), None).unwrap();
    /// assert!(matches!(source, RegionSource::Region(_)));
    ///
    /// assert!(RegionSource::from_inputs(None, None).is_err());
    /// ```
    pub fn from_inputs(region: Option<&str>, bed_file: Option<&Path>) -> Result<Self> {
        match (region, bed_file) {
            (Some(region), None) => Ok(RegionSource::Region(region.parse()?)),
            (None, Some(path)) => Ok(RegionSource::BedFile(path.to_path_buf())),
            (Some(_), Some(_)) => Err(LiftoverError::InvalidInputSelection("got both")),
            (None, None) => Err(LiftoverError::InvalidInputSelection("got neither")),
        }
    }

    /// Feeds every interval, in input order, to `f`.
    ///
    /// BED records are streamed; nothing is buffered beyond the reader's
    /// own window. Returns the number of intervals visited.
    pub fn for_each_interval<F>(&self, mut f: F) -> Result<usize>
    where
        F: FnMut(Interval) -> Result<()>,
    {
        match self {
            RegionSource::Region(region) => {
                debug!("Using single region {}", region);
                f(Interval::from(region))?;
                Ok(1)
            }
            RegionSource::BedFile(path) => {
                info!("Reading regions from file {}", path.display());

                let count = match detect_bed_columns(path)? {
                    BedColumns::Bed6 => read_records::<Bed6, _>(path, f)?,
                    BedColumns::Bed5 => read_records::<Bed5, _>(path, f)?,
                    BedColumns::Bed4 => read_records::<Bed4, _>(path, f)?,
                    BedColumns::Bed3 => read_records::<Bed3, _>(path, f)?,
                };

                info!("Read {} regions from file {}", count, path.display());
                Ok(count)
            }
        }
    }
}

/// Widest BED layout the first record of a file satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BedColumns {
    Bed3,
    Bed4,
    Bed5,
    Bed6,
}

fn bed_error(path: &Path, e: &dyn std::fmt::Display) -> LiftoverError {
    LiftoverError::BedRead {
        path: path.to_path_buf(),
        msg: e.to_string(),
    }
}

/// Picks the reader layout from the first record; files without strand
/// columns are read as BED3/4/5 and yield intervals with no strand.
///
/// Falls back to BED3, so a first record no layout accepts is reported by
/// the actual read.
fn detect_bed_columns(path: &Path) -> Result<BedColumns> {
    if first_record_parses::<Bed6>(path)? {
        Ok(BedColumns::Bed6)
    } else if first_record_parses::<Bed5>(path)? {
        Ok(BedColumns::Bed5)
    } else if first_record_parses::<Bed4>(path)? {
        Ok(BedColumns::Bed4)
    } else {
        Ok(BedColumns::Bed3)
    }
}

fn first_record_parses<R>(path: &Path) -> Result<bool>
where
    R: BedFormat + Into<GenePred> + Send,
{
    let mut reader = Reader::<R>::from_path(path).map_err(|e| bed_error(path, &e))?;
    let parses = !matches!(reader.records().next(), Some(Err(_)));

    debug!(
        "First record of {} parses as {}: {}",
        path.display(),
        std::any::type_name::<R>(),
        parses
    );
    Ok(parses)
}

fn read_records<R, F>(path: &Path, mut f: F) -> Result<usize>
where
    R: BedFormat + Into<GenePred> + Send,
    F: FnMut(Interval) -> Result<()>,
{
    let mut reader = Reader::<R>::from_path(path).map_err(|e| bed_error(path, &e))?;
    let mut count = 0;

    for record in reader.records() {
        let record = record.map_err(|e| bed_error(path, &e))?;
        f(Interval::from(record))?;
        count += 1;
    }

    Ok(count)
}
