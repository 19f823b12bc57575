//! Gene-labelled regulatory domains and element association counts.
//!
//! This crate answers "which elements could plausibly act on which gene?"
//! under two policies:
//!
//! - **TAD projection**: a gene inherits every TAD it overlaps
//!   ([`project_tads`]).
//! - **Regulatory domains**: a GREAT-style basal window around each TSS,
//!   extended on both sides ([`extend_domains`]).
//!
//! Either set of [`DerivedInterval`](models::DerivedInterval)s is then joined
//! against an element store and reduced to a per-gene [`CountTable`](models::CountTable)
//! ([`aggregate`]).
//!
//! # Example
//!
//! ```
//! use arassoc_core::models::{GenomicInterval, IntervalStore};
//! use arassoc_domains::{aggregate, project_tads, proportion};
//!
//! let genes = IntervalStore::build(vec![GenomicInterval::new("chr1", 100, 200, "GJB2")]).unwrap();
//! let tads = IntervalStore::build(vec![GenomicInterval::new("chr1", 50, 500, "tad1")]).unwrap();
//! let ars = IntervalStore::build(vec![
//!     GenomicInterval::new("chr1", 300, 310, "AR1"),
//!     GenomicInterval::new("chr1", 600, 610, "AR2"),
//! ]).unwrap();
//!
//! let table = aggregate(&project_tads(&genes, &tads), &ars).unwrap();
//! assert_eq!(table.get("GJB2"), Some(1));
//! assert_eq!(proportion(&table, genes.labels().len()).unwrap(), 100.0);
//! ```

pub mod aggregate;
pub mod domains;
pub mod errors;
pub mod models;
pub mod report;

// re-exports
pub use aggregate::{aggregate, associations, proportion};
pub use domains::{extend_domains, project_tads, trim_domains};
pub use errors::DomainError;
