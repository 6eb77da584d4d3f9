//! In-memory CGATS table.

use crate::{CgatsError, TabularAccessor, parse, write};

/// Sheet type used by a freshly created table.
pub const DEFAULT_SHEET_TYPE: &str = "CGATS.17";

/// A header property.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Keyword, e.g. `ORIGINATOR`
    pub key: String,
    /// Value text, without quotes
    pub value: String,
    /// Whether the value is written as a quoted string
    pub quoted: bool,
}

/// One cell of the data block.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Numeric cell
    Number(f64),
    /// Text cell (quoted, or a token that is not a number)
    Text(String),
}

impl Cell {
    /// Numeric value, parsing text cells when possible.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// A parsed or under-construction CGATS table.
///
/// # Example
///
/// ```rust
/// use it8_cgats::{Cgats, TabularAccessor};
///
/// let text = b"CTI1\n\nCOLOR_REP \"RGB_XYZ\"\nNUMBER_OF_FIELDS 2\n\
///     BEGIN_DATA_FORMAT\nSAMPLE_ID RGB_R\nEND_DATA_FORMAT\n\
///     NUMBER_OF_SETS 1\nBEGIN_DATA\n1 0.5\nEND_DATA\n";
/// let table = Cgats::parse(text).unwrap();
///
/// assert_eq!(table.sheet_type(), "CTI1");
/// assert_eq!(table.property("COLOR_REP"), Some("RGB_XYZ"));
/// assert_eq!(table.cell(0, 1), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cgats {
    pub(crate) sheet_type: String,
    pub(crate) properties: Vec<Property>,
    pub(crate) formats: Vec<String>,
    pub(crate) rows: Vec<Vec<Cell>>,
}

impl Default for Cgats {
    fn default() -> Self {
        Self {
            sheet_type: DEFAULT_SHEET_TYPE.to_owned(),
            properties: Vec::new(),
            formats: Vec::new(),
            rows: Vec::new(),
        }
    }
}

impl Cgats {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Header properties in file order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Data-format column names.
    pub fn data_formats(&self) -> &[String] {
        &self.formats
    }

    /// Returns a cell as a number, `None` if absent or non-numeric.
    pub fn try_cell(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row)?.get(col)?.as_f64()
    }

    /// Returns a raw cell.
    pub fn raw_cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(col)
    }

    fn set_property(&mut self, key: &str, value: String, quoted: bool) {
        match self.properties.iter_mut().find(|p| p.key == key) {
            Some(p) => {
                p.value = value;
                p.quoted = quoted;
            }
            None => self.properties.push(Property {
                key: key.to_owned(),
                value,
                quoted,
            }),
        }
    }
}

impl TabularAccessor for Cgats {
    type Error = CgatsError;

    fn empty() -> Self {
        Self::new()
    }

    fn parse(bytes: &[u8]) -> Result<Self, CgatsError> {
        parse::parse(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        write::to_bytes(self)
    }

    fn sheet_type(&self) -> &str {
        &self.sheet_type
    }

    fn set_sheet_type(&mut self, sheet_type: &str) {
        self.sheet_type = sheet_type.to_owned();
    }

    fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    fn set_property_str(&mut self, key: &str, value: &str) {
        self.set_property(key, value.to_owned(), true);
    }

    fn set_property_f64(&mut self, key: &str, value: f64) {
        self.set_property(key, write::format_number(value), false);
    }

    fn set_data_format(&mut self, col: usize, name: &str) {
        if self.formats.len() <= col {
            self.formats.resize(col + 1, String::new());
        }
        self.formats[col] = name.to_owned();
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell(&self, row: usize, col: usize) -> f64 {
        self.try_cell(row, col).unwrap_or(0.0)
    }

    fn set_cell(&mut self, row: usize, col: usize, value: f64) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, Cell::Number(0.0));
        }
        cells[col] = Cell::Number(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_replace_keeps_order() {
        let mut t = Cgats::new();
        t.set_property_str("ORIGINATOR", "a");
        t.set_property_str("REFERENCE", "b");
        t.set_property_str("ORIGINATOR", "c");

        let keys: Vec<_> = t.properties().iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, ["ORIGINATOR", "REFERENCE"]);
        assert_eq!(t.property("ORIGINATOR"), Some("c"));
    }

    #[test]
    fn test_numeric_property() {
        let mut t = Cgats::new();
        t.set_property_f64("NUMBER_OF_SETS", 42.0);
        assert_eq!(t.property("NUMBER_OF_SETS"), Some("42"));
        assert_eq!(t.numeric_property("NUMBER_OF_SETS"), Some(42.0));
        assert_eq!(t.numeric_property("MISSING"), None);
    }

    #[test]
    fn test_set_cell_grows_grid() {
        let mut t = Cgats::new();
        t.set_cell(2, 3, 7.5);
        assert_eq!(t.row_count(), 3);
        assert_eq!(t.cell(2, 3), 7.5);
        assert_eq!(t.cell(2, 0), 0.0);
        assert_eq!(t.cell(9, 9), 0.0);
        assert_eq!(t.try_cell(9, 9), None);
    }

    #[test]
    fn test_text_cell() {
        let cell = Cell::Text("A1".into());
        assert_eq!(cell.as_f64(), None);
        assert_eq!(Cell::Text(" 2.5 ".into()).as_f64(), Some(2.5));
    }

    #[test]
    fn test_data_format() {
        let mut t = Cgats::new();
        t.set_data_format(1, "RGB_R");
        t.set_data_format(0, "SAMPLE_ID");
        assert_eq!(t.data_formats(), ["SAMPLE_ID", "RGB_R"]);
    }
}
