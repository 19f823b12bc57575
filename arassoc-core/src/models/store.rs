use std::collections::{BTreeMap, BTreeSet};
use std::ops::{Index, Range};

use log::debug;

use crate::errors::ValidationError;
use crate::models::GenomicInterval;

///
/// An immutable, chromosome-partitioned collection of [`GenomicInterval`]s.
///
/// All intervals live in one vector sorted by `(chr, start, end, label)`;
/// each chromosome owns a contiguous slice of it. The position of an interval
/// in that vector is its *global index*, which is what
/// [`all`](IntervalStore::all) enumerates and what overlap pairs refer to.
///
/// A store is frozen after construction, so it can be shared across threads
/// without locking.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntervalStore {
    intervals: Vec<GenomicInterval>,
    partitions: BTreeMap<String, Range<usize>>,
}

/// One chromosome's slice of a store together with the global index of its
/// first interval.
#[derive(Debug, Clone, Copy)]
pub struct Partition<'a> {
    pub chr: &'a str,
    pub offset: usize,
    pub intervals: &'a [GenomicInterval],
}

impl IntervalStore {
    ///
    /// Build a store from ordinary intervals. Every record must satisfy
    /// `start < end` and carry a chromosome name.
    ///
    pub fn build<I>(records: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = GenomicInterval>,
    {
        let intervals = records
            .into_iter()
            .map(|iv| iv.validate().map(|_| iv))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_validated(intervals))
    }

    ///
    /// Build a store from point-like records (e.g. transcription start
    /// sites), where zero-width entries with `start == end` are allowed.
    ///
    pub fn build_sites<I>(records: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = GenomicInterval>,
    {
        let intervals = records
            .into_iter()
            .map(|iv| iv.validate_site().map(|_| iv))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_validated(intervals))
    }

    fn from_validated(mut intervals: Vec<GenomicInterval>) -> Self {
        intervals.sort_by(|a, b| a.chr.cmp(&b.chr).then_with(|| a.sweep_cmp(b)));

        let mut partitions: BTreeMap<String, Range<usize>> = BTreeMap::new();
        let mut chr_start = 0;
        while chr_start < intervals.len() {
            let chr = &intervals[chr_start].chr;
            let mut chr_end = chr_start;
            while chr_end < intervals.len() && intervals[chr_end].chr == *chr {
                chr_end += 1;
            }
            partitions.insert(chr.clone(), chr_start..chr_end);
            chr_start = chr_end;
        }

        debug!(
            "built interval store: {} intervals on {} chromosomes",
            intervals.len(),
            partitions.len()
        );

        IntervalStore {
            intervals,
            partitions,
        }
    }

    /// Intervals on `chr` sorted by `(start, end)`. Unknown chromosomes
    /// yield an empty slice.
    pub fn intervals_on(&self, chr: &str) -> &[GenomicInterval] {
        match self.partitions.get(chr) {
            Some(range) => &self.intervals[range.clone()],
            None => &[],
        }
    }

    /// Every interval, in global index order.
    pub fn all(&self) -> std::slice::Iter<'_, GenomicInterval> {
        self.intervals.iter()
    }

    pub fn get(&self, index: usize) -> Option<&GenomicInterval> {
        self.intervals.get(index)
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Chromosome names in lexical order.
    pub fn chromosomes(&self) -> impl Iterator<Item = &str> {
        self.partitions.keys().map(String::as_str)
    }

    pub fn partition(&self, chr: &str) -> Option<Partition<'_>> {
        self.partitions.get_key_value(chr).map(|(chr, range)| Partition {
            chr,
            offset: range.start,
            intervals: &self.intervals[range.clone()],
        })
    }

    pub fn partitions(&self) -> impl Iterator<Item = Partition<'_>> {
        self.partitions.iter().map(|(chr, range)| Partition {
            chr,
            offset: range.start,
            intervals: &self.intervals[range.clone()],
        })
    }

    /// Distinct labels carried by the store.
    pub fn labels(&self) -> BTreeSet<&str> {
        self.intervals.iter().map(|iv| iv.label.as_str()).collect()
    }
}

impl Index<usize> for IntervalStore {
    type Output = GenomicInterval;

    /// Panics when `index` is out of bounds, like slice indexing.
    fn index(&self, index: usize) -> &Self::Output {
        &self.intervals[index]
    }
}

impl<'a> IntoIterator for &'a IntervalStore {
    type Item = &'a GenomicInterval;
    type IntoIter = std::slice::Iter<'a, GenomicInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.all()
    }
}
