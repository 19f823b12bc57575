use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::ValidationError;

/// Strand of a genomic feature.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, Default)]
pub enum Strand {
    Plus,
    Minus,
    #[default]
    Unknown,
}

impl FromStr for Strand {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Plus),
            "-" => Ok(Strand::Minus),
            "." | "*" | "?" => Ok(Strand::Unknown),
            other => Err(ValidationError::InvalidStrand(other.to_string())),
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Strand::Plus => "+",
            Strand::Minus => "-",
            Strand::Unknown => ".",
        };
        write!(f, "{}", s)
    }
}

///
/// A labelled, half-open range `[start, end)` on one chromosome.
///
/// Coordinates are signed so that derived domains extending past the
/// chromosome origin can be represented without clamping.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct GenomicInterval {
    pub chr: String,
    pub start: i64,
    pub end: i64,
    pub label: String,
    pub strand: Strand,
}

impl GenomicInterval {
    pub fn new(chr: &str, start: i64, end: i64, label: &str) -> Self {
        GenomicInterval {
            chr: chr.to_string(),
            start,
            end,
            label: label.to_string(),
            strand: Strand::Unknown,
        }
    }

    pub fn with_strand(mut self, strand: Strand) -> Self {
        self.strand = strand;
        self
    }

    /// Check if this interval overlaps `[start, end)` on the same chromosome.
    ///
    /// Intervals that only touch at an endpoint do not overlap.
    #[inline]
    pub fn overlap(&self, start: i64, end: i64) -> bool {
        self.start < end && start < self.end
    }

    /// Length of the shared span with `other`, zero when they are disjoint
    /// or on different chromosomes.
    #[inline]
    pub fn intersect(&self, other: &GenomicInterval) -> i64 {
        if self.chr != other.chr {
            return 0;
        }
        (self.end.min(other.end) - self.start.max(other.start)).max(0)
    }

    /// Strict validation used for ordinary intervals: `start < end`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_chr()?;
        if self.start >= self.end {
            return Err(ValidationError::EmptyInterval {
                chr: self.chr.clone(),
                start: self.start,
                end: self.end,
                label: self.label.clone(),
            });
        }
        Ok(())
    }

    /// Relaxed validation for point records such as TSSs: `start <= end`.
    pub fn validate_site(&self) -> Result<(), ValidationError> {
        self.validate_chr()?;
        if self.start > self.end {
            return Err(ValidationError::InvertedSite {
                chr: self.chr.clone(),
                start: self.start,
                end: self.end,
                label: self.label.clone(),
            });
        }
        Ok(())
    }

    fn validate_chr(&self) -> Result<(), ValidationError> {
        if self.chr.trim().is_empty() {
            return Err(ValidationError::EmptyChromosome {
                label: self.label.clone(),
            });
        }
        Ok(())
    }

    /// Order used inside a store partition: `(start, end)`, then label for
    /// a total, deterministic order.
    #[inline]
    pub fn sweep_cmp(&self, other: &GenomicInterval) -> Ordering {
        self.start
            .cmp(&other.start)
            .then(self.end.cmp(&other.end))
            .then_with(|| self.label.cmp(&other.label))
    }
}

impl Display for GenomicInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.chr, self.start, self.end, self.label, self.strand
        )
    }
}
