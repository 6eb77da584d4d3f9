//! CGATS text writer.

use crate::table::{Cell, Cgats};
use std::fmt::Write as _;

const NUMBER_OF_FIELDS: &str = "NUMBER_OF_FIELDS";
const NUMBER_OF_SETS: &str = "NUMBER_OF_SETS";

/// Formats a number the way it is written into the file.
///
/// Uses the shortest representation that parses back to the same value.
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

/// Returns true if `value` can be written as one quoted token.
///
/// A value must stay on one line and may contain `"` or `'` but not both.
pub fn is_quotable(value: &str) -> bool {
    !value.contains(['\n', '\r']) && !(value.contains('"') && value.contains('\''))
}

/// Wraps a value in quotes, using `'` when it contains `"`.
fn quote(value: &str) -> String {
    if value.contains('"') {
        format!("'{value}'")
    } else {
        format!("\"{value}\"")
    }
}

/// Serializes a table to NUL-terminated CGATS text.
pub fn to_bytes(table: &Cgats) -> Vec<u8> {
    let mut out = String::new();
    let fields = table.formats.len();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", table.sheet_type);
    out.push('\n');

    for p in &table.properties {
        if p.key == NUMBER_OF_FIELDS || p.key == NUMBER_OF_SETS {
            continue;
        }
        if p.quoted {
            let _ = writeln!(out, "{}\t{}", p.key, quote(&p.value));
        } else if p.value.is_empty() {
            let _ = writeln!(out, "{}", p.key);
        } else {
            let _ = writeln!(out, "{}\t{}", p.key, p.value);
        }
    }

    if fields > 0 {
        let _ = writeln!(out, "{NUMBER_OF_FIELDS}\t{fields}");
        out.push_str("BEGIN_DATA_FORMAT\n");
        out.push_str(&table.formats.join("\t"));
        out.push_str("\nEND_DATA_FORMAT\n");
    }

    if fields > 0 || !table.rows.is_empty() {
        let sets = table.rows.len();
        let _ = writeln!(out, "{NUMBER_OF_SETS}\t{sets}");
        out.push_str("BEGIN_DATA\n");
        for row in &table.rows {
            let width = fields.max(row.len());
            let line = (0..width)
                .map(|i| match row.get(i) {
                    Some(Cell::Number(v)) => format_number(*v),
                    Some(Cell::Text(s)) => quote(s),
                    None => format_number(0.0),
                })
                .collect::<Vec<_>>()
                .join("\t");
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str("END_DATA\n");
    }

    let mut bytes = out.into_bytes();
    bytes.push(0);
    bytes
}
