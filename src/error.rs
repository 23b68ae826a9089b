//! Error types for neurodna

use thiserror::Error;

/// Result type for neurodna operations
pub type Result<T> = std::result::Result<T, NeurodnaError>;

/// neurodna error types
///
/// Every decoder failure maps to one of the format variants; construction of
/// neurons, layers and networks never fails. Positions are zero-based symbol
/// offsets into the stream.
#[derive(Error, Debug)]
pub enum NeurodnaError {
    #[error("expected START marker at symbol {position}")]
    ExpectedStart { position: usize },

    #[error("expected STOP marker at symbol {position}")]
    ExpectedStop { position: usize },

    #[error("expected DNA symbol, got '{symbol}' at symbol {position}")]
    ExpectedDna { symbol: char, position: usize },

    #[error("stream truncated at symbol {position} while reading {expected}")]
    Truncated {
        position: usize,
        expected: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NeurodnaError {
    /// True for any error caused by the stream contents rather than the
    /// transport (everything except `Io`).
    pub fn is_format_error(&self) -> bool {
        !matches!(self, NeurodnaError::Io(_))
    }
}
