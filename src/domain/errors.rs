//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur while building, checking or converting an ISBN.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsbnError {
    /// The candidate handed in at a dynamically typed boundary is not a string.
    #[error("ISBN must be a string, got {found}")]
    InvalidType { found: &'static str },

    /// The candidate length is outside the accepted set for the variant.
    #[error("ISBN must have a length of {expected}, got {actual}")]
    InvalidLength { expected: &'static str, actual: usize },

    /// An operation was called while the stored value had the wrong length.
    #[error("{operation} requires a stored length of {expected}, got {actual}")]
    WrongLength {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The stored value was cleared.
    #[error("ISBN value has been cleared")]
    NoValue,

    /// A body character is not a decimal digit.
    #[error("Invalid digit {character:?} at position {position}")]
    InvalidDigit { character: char, position: usize },

    /// Strict ISBN-13 to ISBN-10 conversion saw a prefix other than 978.
    #[error("Only 978-prefixed ISBN-13 values have an ISBN-10 form, got prefix {found}")]
    PrefixMismatch { found: String },
}

/// Convenience type alias for Results with IsbnError
pub type IsbnResult<T> = Result<T, IsbnError>;
