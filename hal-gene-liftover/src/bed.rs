//! Writes flanked query intervals as BED6 for halLiftover.

use log::info;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    consts::{BED_NAME_PLACEHOLDER, BED_SCORE_PLACEHOLDER, BED_UNKNOWN_STRAND},
    error::{LiftoverError, Result},
    source::{Interval, RegionSource},
};

/// Interval widened by a symmetric flank.
///
/// Coordinates are signed: flanking is not clamped to the sequence, so the
/// start can go negative. Bounds are left to halLiftover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FlankedRange {
    start: i64,
    end: i64,
}

/// Applies `flank` bases on both sides of `interval`.
fn flank_range(interval: &Interval, flank: u64) -> Result<FlankedRange> {
    let overflow = || LiftoverError::FlankOverflow {
        chrom: interval.chrom.clone(),
        start: interval.start,
        end: interval.end,
        flank,
    };

    let flank = i64::try_from(flank).map_err(|_| overflow())?;
    let start = i64::try_from(interval.start).map_err(|_| overflow())?;
    let end = i64::try_from(interval.end).map_err(|_| overflow())?;

    Ok(FlankedRange {
        start: start.checked_sub(flank).ok_or_else(overflow)?,
        end: end.checked_add(flank).ok_or_else(overflow)?,
    })
}

/// Writes one BED6 line per interval: chrom, flanked start, flanked end,
/// `.`, `0`, strand.
fn write_record<W: Write>(writer: &mut W, interval: &Interval, flank: u64) -> Result<()> {
    let range = flank_range(interval, flank)?;
    let strand = interval.strand.map_or(BED_UNKNOWN_STRAND, |s| s.symbol());

    writeln!(
        writer,
        "{}\t{}\t{}\t{}\t{}\t{}",
        interval.chrom,
        range.start,
        range.end,
        BED_NAME_PLACEHOLDER,
        BED_SCORE_PLACEHOLDER,
        strand
    )?;

    Ok(())
}

/// Streams every interval of `source` into `writer`, flanked by `flank`.
///
/// Output order matches input order. Returns the number of records written.
pub fn write_query_records<W: Write>(
    source: &RegionSource,
    flank: u64,
    writer: &mut W,
) -> Result<usize> {
    source.for_each_interval(|interval| write_record(&mut *writer, &interval, flank))
}

/// Creates (or truncates) `path` and writes the flanked query BED into it.
pub fn write_query_bed(source: &RegionSource, flank: u64, path: &Path) -> Result<usize> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let count = write_query_records(source, flank, &mut writer)?;
    writer.flush()?;

    info!(
        "Wrote {} query regions (flank={}) to {}",
        count,
        flank,
        path.display()
    );

    Ok(count)
}
