use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use arassoc_core::models::GenomicInterval;

/// `true` iff the two intervals share a chromosome and a non-empty span.
///
/// Half-open semantics: intervals that merely touch at an endpoint do not
/// overlap. The predicate is symmetric.
#[inline]
pub fn overlaps(a: &GenomicInterval, b: &GenomicInterval) -> bool {
    a.chr == b.chr && a.start < b.end && b.start < a.end
}

///
/// A coordinate sweep over two single-chromosome slices, both sorted by
/// `(start, end)`.
///
/// Queries are visited in order. For each one the matching subjects fall into
/// two groups that overlap it by construction:
///
/// * the active set: subjects starting before the query's start and ending
///   after it. Subjects leave the set through a min-heap on `end` once a
///   query starts at or past their end, which no later query can undo.
/// * the run: subjects starting inside `[query.start, query.end)`, found as
///   one contiguous range of the start-sorted slice with a binary search.
///
/// The work per query is proportional to the pairs it reports plus a
/// logarithmic factor, so a long interval never makes later short ones pay
/// for subjects they cannot reach.
///
/// Pairs come out grouped by query, and within a query in subject order.
///
/// # Examples
///
/// ```
/// use arassoc_core::models::GenomicInterval;
/// use arassoc_overlaprs::sweep::IterSweep;
///
/// let genes = vec![GenomicInterval::new("chr1", 100, 200, "GJB2")];
/// let tads = vec![
///     GenomicInterval::new("chr1", 50, 500, "tad1"),
///     GenomicInterval::new("chr1", 150, 900, "tad2"),
///     GenomicInterval::new("chr1", 200, 900, "tad3"),
/// ];
///
/// let hits: Vec<(usize, usize)> = IterSweep::new(&genes, &tads).collect();
/// assert_eq!(hits, vec![(0, 0), (0, 1)]);
/// ```
pub struct IterSweep<'a> {
    query: &'a [GenomicInterval],
    subject: &'a [GenomicInterval],
    query_idx: usize,
    next_subject: usize,
    active: BTreeSet<usize>,
    active_ends: BinaryHeap<Reverse<(i64, usize)>>,
    hits: Vec<usize>,
    cursor: usize,
    hits_loaded: bool,
}

impl<'a> IterSweep<'a> {
    pub fn new(query: &'a [GenomicInterval], subject: &'a [GenomicInterval]) -> Self {
        debug_assert!(query.is_sorted_by(|a, b| a.start <= b.start));
        debug_assert!(subject.is_sorted_by(|a, b| a.start <= b.start));
        IterSweep {
            query,
            subject,
            query_idx: 0,
            next_subject: 0,
            active: BTreeSet::new(),
            active_ends: BinaryHeap::new(),
            hits: Vec::new(),
            cursor: 0,
            hits_loaded: false,
        }
    }

    fn load_hits(&mut self) {
        let (q_start, q_end) = {
            let q = &self.query[self.query_idx];
            (q.start, q.end)
        };

        // admit everything that starts strictly before this query
        while self.next_subject < self.subject.len()
            && self.subject[self.next_subject].start < q_start
        {
            let s = &self.subject[self.next_subject];
            if s.end > q_start {
                self.active.insert(self.next_subject);
                self.active_ends.push(Reverse((s.end, self.next_subject)));
            }
            self.next_subject += 1;
        }

        while let Some(&Reverse((end, si))) = self.active_ends.peek() {
            if end > q_start {
                break;
            }
            self.active_ends.pop();
            self.active.remove(&si);
        }

        self.hits.clear();
        self.hits.extend(self.active.iter().copied());

        let rest = &self.subject[self.next_subject..];
        let run_len = rest.partition_point(|s| s.start < q_end);
        // only a zero-width subject sitting exactly on q_start fails this
        self.hits.extend(
            (self.next_subject..self.next_subject + run_len)
                .filter(|&si| self.subject[si].end > q_start),
        );

        self.cursor = 0;
        self.hits_loaded = true;
    }
}

impl Iterator for IterSweep<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.query_idx >= self.query.len() {
                return None;
            }

            if !self.hits_loaded {
                self.load_hits();
            }

            if let Some(&si) = self.hits.get(self.cursor) {
                self.cursor += 1;
                return Some((self.query_idx, si));
            }

            self.query_idx += 1;
            self.hits_loaded = false;
        }
    }
}

/// Collect every overlapping `(query, subject)` position pair of two sorted
/// single-chromosome slices.
pub fn sweep(query: &[GenomicInterval], subject: &[GenomicInterval]) -> Vec<(usize, usize)> {
    IterSweep::new(query, subject).collect()
}
