//! The tabular accessor seam.
//!
//! Calibration semantics (TI1/TI3/CCMX) only need a handful of operations
//! from the underlying text format: header properties, the sheet type, the
//! data-format column names and a numeric grid. [`TabularAccessor`] names
//! exactly those operations so the loader and saver in `it8-io` can run
//! against any conforming implementation. [`crate::Cgats`] is the one this
//! workspace ships.

use std::error::Error;

/// Read/write access to a CGATS-style table.
///
/// Rows and columns are 0-based and refer to the data block only; header
/// properties live outside the grid.
pub trait TabularAccessor: Sized {
    /// Error returned when raw bytes cannot be parsed.
    type Error: Error + Send + Sync + 'static;

    /// Creates an empty table, ready to be filled and serialized.
    fn empty() -> Self;

    /// Parses a table from raw bytes.
    fn parse(bytes: &[u8]) -> Result<Self, Self::Error>;

    /// Serializes the table. The returned buffer is NUL-terminated.
    fn to_bytes(&self) -> Vec<u8>;

    /// Sheet-type tag from the first line of the file.
    fn sheet_type(&self) -> &str;

    /// Sets the sheet-type tag.
    fn set_sheet_type(&mut self, sheet_type: &str);

    /// Returns a header property as text.
    fn property(&self, key: &str) -> Option<&str>;

    /// Returns a header property parsed as a number.
    fn numeric_property(&self, key: &str) -> Option<f64> {
        self.property(key).and_then(|v| v.trim().parse().ok())
    }

    /// Sets a string header property (written quoted).
    fn set_property_str(&mut self, key: &str, value: &str);

    /// Sets a numeric header property (written bare).
    fn set_property_f64(&mut self, key: &str, value: f64);

    /// Names data column `col`.
    fn set_data_format(&mut self, col: usize, name: &str);

    /// Number of data rows present.
    fn row_count(&self) -> usize;

    /// Returns a numeric cell, or `0.0` if the cell is absent or not numeric.
    fn cell(&self, row: usize, col: usize) -> f64;

    /// Sets a numeric cell, growing the grid as needed.
    fn set_cell(&mut self, row: usize, col: usize, value: f64);
}
