use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the dictionary source.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dictionary contains no words")]
    Empty,
}

/// Reasons a (start, end) query is rejected before any search runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Words must be of the same length!")]
    LengthMismatch { start: usize, end: usize },

    #[error("Words must be between {min} and {max} characters long (got {length})")]
    OutOfRange { length: usize, min: usize, max: usize },

    #[error("Unrecognized word(s): {}", .0.join(", "))]
    UnrecognizedWords(Vec<String>),
}

/// Failures reading or writing batch query files.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("malformed query file: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush report output: {0}")]
    Io(#[from] std::io::Error),
}

/// Construction-time failures for a [`crate::Solver`].
#[derive(Debug, Error)]
pub enum LadderError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error("no dictionary words fall within the length window {min}..={max}")]
    EmptyLengthWindow { min: usize, max: usize },
}
