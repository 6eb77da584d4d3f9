//! # it8-io
//!
//! Load and save TI1, TI3 and CCMX calibration files.
//!
//! This crate translates between the [`It8`](it8_core::It8) document model
//! and a CGATS-style table:
//!
//! - [`load`] / [`load_into`] - bytes to document
//! - [`save`] - document to NUL-terminated bytes
//! - [`read_file`] / [`write_file`] - the same, against the file system
//!
//! Both directions are generic over [`TabularAccessor`](it8_cgats::TabularAccessor)
//! through [`load_with`] and [`save_with`]; the plain functions use
//! [`Cgats`](it8_cgats::Cgats).
//!
//! # Quick Start
//!
//! ```rust
//! use it8_core::{It8, It8Kind, Rgb, Xyz};
//!
//! let mut it8 = It8::with_kind(It8Kind::Ti3);
//! it8.set_normalized(true);
//! it8.add_data(Some(Rgb::WHITE), Some(Xyz::new(95.0, 100.0, 108.9)));
//!
//! let bytes = it8_io::save(&it8).unwrap();
//! let back = it8_io::load(&bytes).unwrap();
//!
//! let (_, xyz) = back.data_at(0).unwrap();
//! assert!((xyz.y - 100.0).abs() < 1e-3);
//! ```
//!
//! # Normalization
//!
//! When a TI1/TI3 document is normalized, readings are written relative to
//! the averaged white reading (RGB within 0.01 of full white), scaled to
//! `Y = 100`. The white point itself goes to `LUMINANCE_XYZ_CDM2` and the
//! loader multiplies it back in.
//!
//! # Dependencies
//!
//! - [`it8-core`] - Document model
//! - [`it8-cgats`] - CGATS text table
//! - [`tempfile`] - Atomic file replacement

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
mod file;
mod load;
mod save;

pub use error::{
    AccessorError, It8IoError, It8IoResult, LoadError, LoadResult, SaveError, SaveResult,
};
pub use file::{detect_kind, read_file, write_file};
pub use load::{from_table, kind_from_sheet_type, load, load_into, load_into_with, load_with};
pub use save::{WhitePoint, save, save_with, to_table, white_point};
