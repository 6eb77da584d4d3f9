//! Error types for it8-core operations.
//!
//! The document model itself has very few failure modes: every mutator is
//! infallible and only indexed reads can go wrong. Loading and saving have
//! their own error enums in `it8-io`.
//!
//! # Usage
//!
//! ```rust
//! use it8_core::{It8, It8Error};
//!
//! let it8 = It8::new();
//! let err = it8.data_at(0).unwrap_err();
//! assert!(matches!(err, It8Error::IndexOutOfRange { index: 0, count: 0 }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::SampleStore`] - Indexed lookup
//! - [`crate::It8`] - Document-level data access

use thiserror::Error;

/// Result type alias using [`It8Error`] as the error type.
pub type Result<T> = std::result::Result<T, It8Error>;

/// Errors that can occur when accessing a calibration document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum It8Error {
    /// A reading index is past the end of the sample list.
    ///
    /// Bounds are strict: `index == count` is out of range.
    #[error("reading index {index} out of range ({count} readings stored)")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of stored readings
        count: usize,
    },
}

impl It8Error {
    /// Creates an [`It8Error::IndexOutOfRange`] error.
    #[inline]
    pub fn index_out_of_range(index: usize, count: usize) -> Self {
        Self::IndexOutOfRange { index, count }
    }
}
