//! # it8-cgats
//!
//! Minimal reader and writer for CGATS/IT8.7 text tables.
//!
//! A CGATS file is a sheet-type line, a block of `KEY value` header
//! properties, a `BEGIN_DATA_FORMAT` block naming the columns and a
//! `BEGIN_DATA` block holding one sample per row.
//!
//! # Usage
//!
//! ```rust
//! use it8_cgats::{Cgats, TabularAccessor};
//!
//! let mut table = Cgats::empty();
//! table.set_sheet_type("CCMX");
//! table.set_property_str("ORIGINATOR", "colorimeter-tool");
//! table.set_data_format(0, "XYZ_X");
//! table.set_cell(0, 0, 1.25);
//!
//! let parsed = Cgats::parse(&table.to_bytes()).unwrap();
//! assert_eq!(parsed.sheet_type(), "CCMX");
//! assert_eq!(parsed.cell(0, 0), 1.25);
//! ```
//!
//! # Used By
//!
//! - `it8-io` - TI1/TI3/CCMX load and save

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod accessor;
mod error;
mod parse;
mod table;
mod write;

pub use accessor::TabularAccessor;
pub use error::{CgatsError, CgatsResult};
pub use table::{Cell, Cgats, DEFAULT_SHEET_TYPE, Property};
pub use write::is_quotable;
