use arassoc_core::models::IntervalStore;

use crate::join::{OverlapPair, overlap, overlap_par};

/// Method-call access to the overlap join, with `self` as the query side.
pub trait OverlapJoin {
    fn find_overlaps(&self, subject: &IntervalStore) -> Vec<OverlapPair>;

    fn find_overlaps_par(&self, subject: &IntervalStore) -> Vec<OverlapPair>;
}

impl OverlapJoin for IntervalStore {
    fn find_overlaps(&self, subject: &IntervalStore) -> Vec<OverlapPair> {
        overlap(self, subject)
    }

    fn find_overlaps_par(&self, subject: &IntervalStore) -> Vec<OverlapPair> {
        overlap_par(self, subject)
    }
}
