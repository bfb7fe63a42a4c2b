//! Compact region strings, e.g. `chr11:2159779-2161221:-1`.

use once_cell::sync::Lazy;
use regex::Regex;

use std::{fmt, str::FromStr};

use crate::error::LiftoverError;

static REGION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<chrom>[^:]+):(?P<start>[0-9]+)-(?P<end>[0-9]+):(?P<strand>1|-1)$")
        .unwrap_or_else(|e| panic!("ERROR: invalid region pattern: {}", e))
});

/// Strand of a query region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    /// BED strand column symbol.
    pub fn symbol(self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

/// A stranded, 0-based half-open interval on a single sequence.
///
/// A `Region` always satisfies `start < end`; the only way to build one is
/// [`Region::new`] or parsing a compact region string with [`str::parse`].
///
/// # Example
///
/// ```rust,ignore
/// use hal_gene_liftover::Region;
///
/// let region: Region = "chr11:2159779-2161221:-1".parse().unwrap();
/// assert_eq!(region.start(), 2159778);
/// assert_eq!(region.end(), 2161221);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    chrom: String,
    start: u64,
    end: u64,
    strand: Strand,
}

impl Region {
    /// Builds a region from 0-based half-open coordinates.
    pub fn new(
        chrom: impl Into<String>,
        start: u64,
        end: u64,
        strand: Strand,
    ) -> Result<Self, LiftoverError> {
        let chrom = chrom.into();

        if chrom.is_empty() || chrom.contains(':') {
            return Err(LiftoverError::MalformedRegion {
                region: chrom,
                reason: "sequence name must be non-empty and colon-free".to_string(),
            });
        }

        if start >= end {
            return Err(LiftoverError::InvalidRegion {
                region: format!("{}:{}-{}", chrom, start, end),
                start,
                end,
            });
        }

        Ok(Self {
            chrom,
            start,
            end,
            strand,
        })
    }

    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    /// 0-based inclusive start.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// 0-based exclusive end.
    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }
}

/// Parses `<chrom>:<start>-<end>:<strand>` with 1-based inclusive
/// coordinates and a strand code of `1` or `-1`.
impl FromStr for Region {
    type Err = LiftoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| LiftoverError::MalformedRegion {
            region: s.to_string(),
            reason: reason.to_string(),
        };

        let caps = REGION_PATTERN
            .captures(s)
            .ok_or_else(|| malformed("expected <chrom>:<start>-<end>:<1|-1>"))?;

        let one_based_start: u64 = caps["start"]
            .parse()
            .map_err(|_| malformed("start does not fit in 64 bits"))?;
        let end: u64 = caps["end"]
            .parse()
            .map_err(|_| malformed("end does not fit in 64 bits"))?;

        let start = one_based_start
            .checked_sub(1)
            .ok_or_else(|| malformed("start is 1-based and must be at least 1"))?;

        let strand = match &caps["strand"] {
            "-1" => Strand::Reverse,
            _ => Strand::Forward,
        };

        Region::new(&caps["chrom"], start, end, strand).map_err(|e| match e {
            LiftoverError::InvalidRegion { start, end, .. } => LiftoverError::InvalidRegion {
                region: s.to_string(),
                start,
                end,
            },
            other => other,
        })
    }
}

/// Formats the region back into its compact 1-based form.
impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self.strand {
            Strand::Reverse => "-1",
            Strand::Forward => "1",
        };
        write!(f, "{}:{}-{}:{}", self.chrom, self.start + 1, self.end, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reverse_strand_region() {
        let region: Region = "chr11:2159779-2161221:-1".parse().unwrap();

        assert_eq!(region.chrom(), "chr11");
        assert_eq!(region.start(), 2159778);
        assert_eq!(region.end(), 2161221);
        assert_eq!(region.strand(), Strand::Reverse);
    }

    #[test]
    fn parses_forward_strand_region() {
        let region: Region = "scaffold_1.2|x:1-1:1".parse().unwrap();

        assert_eq!(region.chrom(), "scaffold_1.2|x");
        assert_eq!((region.start(), region.end()), (0, 1));
        assert_eq!(region.strand(), Strand::Forward);
    }

    #[test]
    fn coordinates_follow_one_based_input() {
        for (start, end) in [(1u64, 2u64), (10, 11), (100, 5000), (2, 3)] {
            let region: Region = format!("chr1:{start}-{end}:1").parse().unwrap();
            assert_eq!(region.start(), start - 1);
            assert_eq!(region.end(), end);
        }
    }

    #[test]
    fn rejects_inverted_region() {
        let err = "chrX:100-50:1".parse::<Region>().unwrap_err();
        assert!(matches!(
            err,
            LiftoverError::InvalidRegion {
                start: 99,
                end: 50,
                ..
            }
        ));
        assert!(err.to_string().contains("chrX:100-50:1"));
    }

    #[test]
    fn rejects_single_base_inverted_region() {
        // 1-based start 11 > end 10 becomes 10..10 after conversion
        let err = "chr1:11-10:-1".parse::<Region>().unwrap_err();
        assert!(matches!(err, LiftoverError::InvalidRegion { .. }));
    }

    #[test]
    fn rejects_malformed_strings() {
        for bad in [
            "chr1:100-200",
            "chr1:abc-200:1",
            "chr1:100-200:2",
            "chr1:100-200:+",
            ":100-200:1",
            "chr1:100-200:1 ",
            "chr1:-100-200:1",
            "chr1:1:100-200:1",
            "",
        ] {
            let err = bad.parse::<Region>().unwrap_err();
            assert!(
                matches!(err, LiftoverError::MalformedRegion { .. }),
                "expected malformed error for {:?}, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn rejects_zero_start() {
        let err = "chr1:0-10:1".parse::<Region>().unwrap_err();
        assert!(matches!(err, LiftoverError::MalformedRegion { .. }));
    }

    #[test]
    fn rejects_oversized_coordinates() {
        let err = "chr1:1-99999999999999999999999:1"
            .parse::<Region>()
            .unwrap_err();
        assert!(matches!(err, LiftoverError::MalformedRegion { .. }));
    }

    #[test]
    fn new_enforces_invariants() {
        assert!(Region::new("chr1", 5, 5, Strand::Forward).is_err());
        assert!(Region::new("chr:1", 0, 5, Strand::Forward).is_err());
        assert!(Region::new("chr1", 0, 5, Strand::Reverse).is_ok());
    }

    #[test]
    fn strand_symbols() {
        assert_eq!(Strand::Forward.symbol(), '+');
        assert_eq!(Strand::Reverse.symbol(), '-');
    }

    #[test]
    fn display_round_trips_compact_form() {
        let region: Region = "chr11:2159779-2161221:-1".parse().unwrap();
        assert_eq!(region.to_string(), "chr11:2159779-2161221:-1");
    }
}
