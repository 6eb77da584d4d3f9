//! CGATS error types.

use thiserror::Error;

/// Result type for CGATS operations.
pub type CgatsResult<T> = Result<T, CgatsError>;

/// Errors that can occur while reading CGATS text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CgatsError {
    /// Input contained nothing but whitespace, comments or NUL padding.
    #[error("empty CGATS input")]
    Empty,

    /// Input is not valid UTF-8.
    #[error("CGATS input is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Syntax error.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },
}

impl CgatsError {
    /// Creates a [`CgatsError::Parse`] error.
    #[inline]
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
