//! Error types for layout translation and parsing.

use thiserror::Error;

/// Errors that can occur when translating a layout string into a strftime
/// format.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("unsupported token '{token}' at position {position}")]
    UnsupportedToken { position: usize, token: char },

    #[error("unterminated quote at position {position}")]
    UnterminatedQuote { position: usize },

    #[error("empty layout")]
    EmptyLayout,
}

/// Errors that can occur when parsing a date string under a known layout.
#[derive(Debug, Error)]
pub enum ParseDateError {
    #[error(transparent)]
    Chrono(#[from] chrono::ParseError),

    /// The wall-clock time falls in a DST gap of the target timezone.
    #[error("local time does not exist in the target timezone")]
    NonexistentLocalTime,
}
