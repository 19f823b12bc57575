//! Genome-wide overlap joins between two [`IntervalStore`]s.
//!
//! The join runs [`IterSweep`] once per chromosome shared by both stores and
//! translates slice positions back into global store indices. Chromosomes
//! present in only one store contribute nothing.
//!
//! # Examples
//!
//! ```
//! use arassoc_core::models::{GenomicInterval, IntervalStore};
//! use arassoc_overlaprs::join::overlap;
//!
//! let genes = IntervalStore::build(vec![
//!     GenomicInterval::new("chr1", 100, 200, "GJB2"),
//!     GenomicInterval::new("chr2", 100, 200, "MYO15A"),
//! ]).unwrap();
//! let tads = IntervalStore::build(vec![
//!     GenomicInterval::new("chr1", 50, 500, "chr1:50-500"),
//! ]).unwrap();
//!
//! let pairs = overlap(&genes, &tads);
//! assert_eq!(pairs.len(), 1);
//! assert_eq!(genes.get(pairs[0].query_index).unwrap().label, "GJB2");
//! ```

use arassoc_core::models::{IntervalStore, Partition};
use log::debug;
use rayon::prelude::*;

use crate::sweep::IterSweep;

/// A reference to one overlapping `(query, subject)` pair by global store
/// index. It borrows nothing and is only meaningful next to the two stores it
/// was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlapPair {
    pub query_index: usize,
    pub subject_index: usize,
}

fn shared_partitions<'a>(
    query: &'a IntervalStore,
    subject: &'a IntervalStore,
) -> Vec<(Partition<'a>, Partition<'a>)> {
    query
        .partitions()
        .filter_map(|q| subject.partition(q.chr).map(|s| (q, s)))
        .collect()
}

fn join_partition(query: Partition<'_>, subject: Partition<'_>) -> Vec<OverlapPair> {
    IterSweep::new(query.intervals, subject.intervals)
        .map(|(qi, si)| OverlapPair {
            query_index: query.offset + qi,
            subject_index: subject.offset + si,
        })
        .collect()
}

///
/// Find every `(query, subject)` pair whose intervals overlap.
///
/// Multiplicities are preserved and nothing is deduplicated. Pairs are ordered
/// by chromosome, then query, then subject. An empty result is a normal
/// outcome, including when either store is empty.
///
pub fn overlap(query: &IntervalStore, subject: &IntervalStore) -> Vec<OverlapPair> {
    let pairs: Vec<OverlapPair> = shared_partitions(query, subject)
        .into_iter()
        .flat_map(|(q, s)| join_partition(q, s))
        .collect();

    debug!(
        "overlap join: {} query x {} subject intervals -> {} pairs",
        query.len(),
        subject.len(),
        pairs.len()
    );

    pairs
}

///
/// Same as [`overlap`], with each chromosome swept on the rayon thread pool.
///
/// Per-chromosome results are concatenated in chromosome order, so the output
/// is identical to the serial join.
///
pub fn overlap_par(query: &IntervalStore, subject: &IntervalStore) -> Vec<OverlapPair> {
    let per_chrom: Vec<Vec<OverlapPair>> = shared_partitions(query, subject)
        .into_par_iter()
        .map(|(q, s)| join_partition(q, s))
        .collect();

    per_chrom.into_iter().flatten().collect()
}
