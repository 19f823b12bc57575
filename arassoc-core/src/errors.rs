use thiserror::Error;

/// Malformed input detected while building an [`IntervalStore`](crate::models::IntervalStore)
/// or while accepting construction parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Interval '{label}' has an empty chromosome name")]
    EmptyChromosome { label: String },

    #[error("Interval '{label}' on {chr} has start >= end ({start} >= {end})")]
    EmptyInterval {
        chr: String,
        start: i64,
        end: i64,
        label: String,
    },

    #[error("Site '{label}' on {chr} has start > end ({start} > {end})")]
    InvertedSite {
        chr: String,
        start: i64,
        end: i64,
        label: String,
    },

    #[error("Parameter '{name}' must be non-negative, got {value}")]
    NegativeParameter { name: &'static str, value: i64 },

    #[error("Unrecognized strand: '{0}'")]
    InvalidStrand(String),
}

/// Failure while loading a coordinate table from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Can't read file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
