//! Error types for object filtering.

use thiserror::Error;

/// Boxed error produced by a fallible predicate.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Filtering errors.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The record sequence was empty.
    #[error("no records to filter")]
    EmptyInput,

    /// A spec could not be built from its JSON description.
    #[error("invalid filter spec: {0}")]
    InvalidSpec(String),

    /// A predicate failed; the original error is passed through untouched.
    #[error(transparent)]
    Predicate(BoxError),
}

/// Result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;
