//! Overlap joins for genomic interval stores.
//!
//! All overlap computation lives here. Higher-level crates (domain
//! construction, association counting) call into this crate rather than
//! re-implementing overlap logic.
//!
//! ## Quick Start
//!
//! ```rust
//! use arassoc_core::models::{GenomicInterval, IntervalStore};
//! use arassoc_overlaprs::OverlapJoin;
//!
//! let ars = IntervalStore::build(vec![
//!     GenomicInterval::new("chr1", 300, 310, "AR1"),
//!     GenomicInterval::new("chr1", 600, 610, "AR2"),
//! ]).unwrap();
//! let tads = IntervalStore::build(vec![
//!     GenomicInterval::new("chr1", 50, 500, "chr1:50-500"),
//! ]).unwrap();
//!
//! let pairs = ars.find_overlaps(&tads);
//! assert_eq!(pairs.len(), 1); // AR2 sits outside the TAD
//! ```
//!
//! ## Algorithm
//!
//! Both stores are already partitioned by chromosome and sorted by
//! `(start, end)`, so each chromosome is joined with a single coordinate
//! sweep instead of a full cross product. Subjects that began before a query
//! are tracked in an active set with a min-heap on their ends, and subjects
//! that begin inside it are located by binary search, so the join costs
//! `O((n + m) log m + k)` for `k` reported pairs on top of the store sort.
//! Chromosomes are independent, which [`join::overlap_par`] exploits.

/// Genome-wide joins over whole stores.
pub mod join;

/// Single-chromosome sweep.
pub mod sweep;

/// Method-style access to the join.
pub mod traits;

// re-exports
pub use self::join::{OverlapPair, overlap, overlap_par};
pub use self::sweep::{IterSweep, overlaps, sweep};
pub use self::traits::OverlapJoin;
