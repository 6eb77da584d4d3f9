//! Error types for loading and saving calibration files.

use std::io;
use thiserror::Error;

/// Boxed error from the tabular accessor.
pub type AccessorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while turning a table into a document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The bytes could not be parsed as a table at all.
    #[error("malformed table: {0}")]
    MalformedTable(#[source] AccessorError),

    /// The sheet type is not CTI1, CTI3 or CCMX.
    #[error("invalid sheet type: {0}")]
    UnknownSheetType(String),

    /// `COLOR_REP` does not match the kind.
    #[error("invalid data format: {0}")]
    InvalidColorFormat(String),

    /// `LUMINANCE_XYZ_CDM2` is not three numbers.
    #[error("LUMINANCE_XYZ_CDM2 format invalid: {0}")]
    InvalidLuminanceFormat(String),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while turning a document into a table.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Normalized output needs at least one white reading.
    #[error("no white sample to normalize against")]
    NoWhiteSample,

    /// A white-point component is zero and cannot be divided by.
    #[error("white point cannot be inverted: {0}")]
    DegenerateWhitePoint(String),

    /// A text field cannot be written as a single quoted value.
    #[error("{key} cannot be written: {value:?}")]
    UnquotableText {
        /// Header keyword the text belongs to
        key: &'static str,
        /// Offending value
        value: String,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors from the file helpers.
#[derive(Debug, Error)]
pub enum It8IoError {
    /// Reading or parsing failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Writing or serializing failed.
    #[error(transparent)]
    Save(#[from] SaveError),
}

/// Result type for loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for saving.
pub type SaveResult<T> = Result<T, SaveError>;

/// Result type for the file helpers.
pub type It8IoResult<T> = Result<T, It8IoError>;

/// Renders an optional property value for error messages.
pub(crate) fn or_null(value: Option<&str>) -> String {
    value.unwrap_or("(null)").to_owned()
}
