//! Core data model for associating genomic elements with genes.
//!
//! This crate holds the [`GenomicInterval`](models::GenomicInterval) record, the frozen,
//! chromosome-partitioned [`IntervalStore`](models::IntervalStore) that every other
//! `arassoc` crate queries, and loaders for the flat coordinate tables those
//! stores are built from.
//!
//! ```
//! use arassoc_core::models::{GenomicInterval, IntervalStore};
//!
//! let genes = IntervalStore::build(vec![
//!     GenomicInterval::new("chr13", 100, 200, "GJB2"),
//!     GenomicInterval::new("chr17", 50, 80, "MYO15A"),
//! ])
//! .unwrap();
//!
//! assert_eq!(genes.intervals_on("chr13").len(), 1);
//! assert!(genes.intervals_on("chrX").is_empty());
//! ```

pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{LoadError, ValidationError};
