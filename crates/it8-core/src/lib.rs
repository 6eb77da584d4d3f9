//! # it8-core
//!
//! Core types for IT8 color-calibration documents.
//!
//! This crate provides the in-memory model shared by the rest of the
//! workspace:
//!
//! - [`It8`] - One calibration document (TI1, TI3 or CCMX)
//! - [`It8Kind`] - Which of the three file kinds a document is
//! - [`SampleStore`] - Paired RGB/XYZ readings
//! - [`Rgb`], [`Xyz`] - Color triplets
//! - [`Mat3x3`] - The CCMX correction matrix
//!
//! ## Crate Structure
//!
//! ```text
//! it8-core (this crate)
//!    ^
//!    |
//!    +-- it8-io (load/save against a tabular accessor)
//!    +-- it8-cli (command-line tool)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Derive `Serialize`/`Deserialize` for the model types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod document;
pub mod error;
pub mod kind;
pub mod matrix;
pub mod samples;

pub use color::{Rgb, Xyz};
pub use document::It8;
pub use error::{It8Error, Result};
pub use kind::It8Kind;
pub use matrix::Mat3x3;
pub use samples::SampleStore;

/// Absolute tolerance used to decide whether a device value is full white.
pub const WHITE_TOLERANCE: f64 = 0.01;

/// Luminance that normalized readings are scaled to.
pub const Y_100: f64 = 100.0;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use it8_core::prelude::*;
///
/// let it8 = It8::with_kind(It8Kind::Ccmx);
/// assert!(it8.matrix().is_zero());
/// ```
pub mod prelude {
    pub use crate::color::{Rgb, Xyz};
    pub use crate::document::It8;
    pub use crate::error::{It8Error, Result};
    pub use crate::kind::It8Kind;
    pub use crate::matrix::Mat3x3;
    pub use crate::samples::SampleStore;
}
