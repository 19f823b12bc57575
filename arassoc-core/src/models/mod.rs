pub mod interval;
pub mod store;

// re-export for cleaner imports
pub use self::interval::{GenomicInterval, Strand};
pub use self::store::{IntervalStore, Partition};
