//! Error types for pluralization.

use thiserror::Error;

/// Pluralization errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluralError {
    /// The input is not a word of two or more ASCII letters.
    #[error("invalid word {0:?}: expected two or more letters")]
    InvalidWord(String),

    /// A count of existing things cannot be negative.
    #[error("negative count: {0}")]
    NegativeCount(i64),
}

/// Result type for pluralization.
pub type PluralResult<T> = Result<T, PluralError>;
