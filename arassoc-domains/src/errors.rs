use thiserror::Error;

use arassoc_core::ValidationError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Cannot compute a proportion of an empty universe ({numerator} labels over 0)")]
    DivisionByZero { numerator: usize },
}
