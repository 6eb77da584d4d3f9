//! Table to document.
//!
//! The loader resolves the document kind from the sheet type, validates the
//! kind-specific header and copies readings or the correction matrix out of
//! the data block. Normalized TI1/TI3 readings are scaled back to absolute
//! values using `LUMINANCE_XYZ_CDM2`.

use crate::error::{LoadError, LoadResult, or_null};
use it8_cgats::{Cgats, TabularAccessor};
use it8_core::{It8, It8Kind, Mat3x3, Rgb, Xyz, Y_100};
use tracing::{debug, trace, warn};

/// Parses a calibration document with the built-in CGATS reader.
///
/// # Example
///
/// ```rust
/// use it8_core::It8Kind;
///
/// let text = b"CCMX\nCOLOR_REP \"XYZ\"\nNUMBER_OF_FIELDS 3\n\
///     BEGIN_DATA_FORMAT\nXYZ_X XYZ_Y XYZ_Z\nEND_DATA_FORMAT\n\
///     NUMBER_OF_SETS 3\nBEGIN_DATA\n1 0 0\n0 1 0\n0 0 1\nEND_DATA\n";
/// let it8 = it8_io::load(text).unwrap();
///
/// assert_eq!(it8.kind(), It8Kind::Ccmx);
/// assert_eq!(it8.matrix()[(1, 1)], 1.0);
/// ```
pub fn load(bytes: &[u8]) -> LoadResult<It8> {
    load_with::<Cgats>(bytes)
}

/// Parses a calibration document with a custom table implementation.
pub fn load_with<T: TabularAccessor>(bytes: &[u8]) -> LoadResult<It8> {
    let table = T::parse(bytes).map_err(|e| LoadError::MalformedTable(Box::new(e)))?;
    from_table(&table)
}

/// Loads into an existing document, replacing its contents.
///
/// Readings and the matrix are cleared before parsing starts, so a failed
/// load leaves `it8` with no samples and a zero matrix.
pub fn load_into(it8: &mut It8, bytes: &[u8]) -> LoadResult<()> {
    load_into_with::<Cgats>(it8, bytes)
}

/// [`load_into`] with a custom table implementation.
pub fn load_into_with<T: TabularAccessor>(it8: &mut It8, bytes: &[u8]) -> LoadResult<()> {
    it8.clear_data();
    *it8 = load_with::<T>(bytes)?;
    Ok(())
}

/// Builds a document from an already parsed table.
pub fn from_table<T: TabularAccessor>(table: &T) -> LoadResult<It8> {
    let sheet_type = table.sheet_type();
    let kind = kind_from_sheet_type(sheet_type)
        .ok_or_else(|| LoadError::UnknownSheetType(sheet_type.to_owned()))?;
    debug!(sheet_type, %kind, "loading calibration table");

    let mut it8 = It8::with_kind(kind);
    match kind {
        It8Kind::Ti1 | It8Kind::Ti3 => load_readings(&mut it8, table)?,
        It8Kind::Ccmx => load_matrix(&mut it8, table)?,
    }

    it8.set_originator(table.property("ORIGINATOR"));
    it8.set_reference(table.property("REFERENCE"));
    Ok(it8)
}

/// Resolves a sheet-type tag by prefix, CTI1 first, then CTI3, then CCMX.
pub fn kind_from_sheet_type(sheet_type: &str) -> Option<It8Kind> {
    It8Kind::ALL
        .into_iter()
        .find(|kind| sheet_type.starts_with(kind.sheet_type()))
}

fn load_readings<T: TabularAccessor>(it8: &mut It8, table: &T) -> LoadResult<()> {
    let color_rep = table.property("COLOR_REP");
    if color_rep != Some("RGB_XYZ") {
        return Err(LoadError::InvalidColorFormat(or_null(color_rep)));
    }

    let luminance = if table.property("NORMALIZED_TO_Y_100") == Some("YES") {
        let lum = parse_luminance(table.property("LUMINANCE_XYZ_CDM2"))?;
        debug!(x = lum.x, y = lum.y, z = lum.z, "readings normalized to Y=100");
        Some(lum)
    } else {
        None
    };
    it8.set_normalized(luminance.is_some());
    it8.set_spectral(table.property("INSTRUMENT_TYPE_SPECTRAL") == Some("YES"));
    it8.set_instrument(table.property("TARGET_INSTRUMENT"));

    let sets = number_of_sets(table);
    for row in 0..sets {
        let mut rgb = Rgb::new(
            table.cell(row, 1),
            table.cell(row, 2),
            table.cell(row, 3),
        );
        let mut xyz = Xyz::new(
            table.cell(row, 4),
            table.cell(row, 5),
            table.cell(row, 6),
        );
        if let Some(lum) = luminance {
            rgb = rgb / Y_100;
            xyz = (xyz / Y_100).mul_components(lum);
        }
        trace!(row, ?rgb, ?xyz, "reading");
        it8.add_data(Some(rgb), Some(xyz));
    }

    Ok(())
}

fn load_matrix<T: TabularAccessor>(it8: &mut It8, table: &T) -> LoadResult<()> {
    let color_rep = table.property("COLOR_REP");
    if color_rep != Some("XYZ") {
        return Err(LoadError::InvalidColorFormat(or_null(color_rep)));
    }

    it8.set_instrument(table.property("INSTRUMENT"));

    let mut matrix = Mat3x3::ZERO;
    for row in 0..3 {
        for col in 0..3 {
            matrix[(row, col)] = table.cell(row, col);
        }
    }
    it8.set_matrix(matrix);
    Ok(())
}

/// Row count announced by `NUMBER_OF_SETS`, capped at the rows present.
fn number_of_sets<T: TabularAccessor>(table: &T) -> usize {
    let present = table.row_count();
    let Some(declared) = table.numeric_property("NUMBER_OF_SETS") else {
        debug!("NUMBER_OF_SETS missing, no readings loaded");
        return 0;
    };
    if declared.is_nan() || declared < 0.0 {
        warn!(declared, "ignoring invalid NUMBER_OF_SETS");
        return 0;
    }
    // Saturating cast; infinity lands on usize::MAX and is capped below.
    let declared = declared as usize;
    if declared > present {
        warn!(declared, present, "NUMBER_OF_SETS exceeds rows present");
        return present;
    }
    declared
}

/// Parses `"X Y Z"` as written by the saver.
fn parse_luminance(text: Option<&str>) -> LoadResult<Xyz> {
    let invalid = || LoadError::InvalidLuminanceFormat(or_null(text));
    let value = text.ok_or_else(invalid)?;

    let parts: Vec<&str> = value.split(' ').collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(invalid());
    };
    let num = |s: &str| s.parse::<f64>().map_err(|_| invalid());
    Ok(Xyz::new(num(x)?, num(y)?, num(z)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ti3(header: &str, rows: &str) -> Vec<u8> {
        format!(
            "CTI3\n\n{header}\nNUMBER_OF_FIELDS 7\nBEGIN_DATA_FORMAT\n\
             SAMPLE_ID RGB_R RGB_G RGB_B XYZ_X XYZ_Y XYZ_Z\nEND_DATA_FORMAT\n\
             NUMBER_OF_SETS {}\nBEGIN_DATA\n{rows}END_DATA\n",
            rows.lines().count()
        )
        .into_bytes()
    }

    #[test]
    fn test_kind_prefix_matching() {
        assert_eq!(kind_from_sheet_type("CTI1"), Some(It8Kind::Ti1));
        assert_eq!(kind_from_sheet_type("CTI3"), Some(It8Kind::Ti3));
        assert_eq!(kind_from_sheet_type("CCMX"), Some(It8Kind::Ccmx));
        assert_eq!(kind_from_sheet_type("CTI3_EXTRA"), Some(It8Kind::Ti3));
        assert_eq!(kind_from_sheet_type("CTI"), None);
        assert_eq!(kind_from_sheet_type("XYZZY"), None);
        assert_eq!(kind_from_sheet_type(""), None);
    }

    #[test]
    fn test_load_plain_ti3() {
        let bytes = ti3(
            "COLOR_REP \"RGB_XYZ\"\nTARGET_INSTRUMENT \"huey\"\nINSTRUMENT_TYPE_SPECTRAL \"YES\"",
            "1 1 1 1 95 100 108.9\n2 0 0 0 0.5 0.6 0.7\n",
        );
        let it8 = load(&bytes).expect("load failed");

        assert_eq!(it8.kind(), It8Kind::Ti3);
        assert!(!it8.normalized());
        assert!(it8.spectral());
        assert_eq!(it8.instrument(), Some("huey"));
        assert_eq!(it8.data_count(), 2);

        let (rgb, xyz) = it8.data_at(1).unwrap();
        assert_eq!(rgb, Rgb::BLACK);
        assert_abs_diff_eq!(xyz.z, 0.7);
    }

    #[test]
    fn test_load_normalized_scales_back() {
        let bytes = ti3(
            "COLOR_REP \"RGB_XYZ\"\nNORMALIZED_TO_Y_100 \"YES\"\n\
             LUMINANCE_XYZ_CDM2 \"190.000000 200.000000 217.800000\"",
            "1 100 100 100 50 50 50\n",
        );
        let it8 = load(&bytes).expect("load failed");

        assert!(it8.normalized());
        let (rgb, xyz) = it8.data_at(0).unwrap();
        assert_abs_diff_eq!(rgb.r, 1.0);
        assert_abs_diff_eq!(xyz.x, 95.0, epsilon = 1e-9);
        assert_abs_diff_eq!(xyz.y, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(xyz.z, 108.9, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_color_rep() {
        let bytes = ti3("COLOR_REP \"LAB\"", "");
        match load(&bytes) {
            Err(LoadError::InvalidColorFormat(actual)) => assert_eq!(actual, "LAB"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_color_rep_reports_null() {
        let err = load(&ti3("ORIGINATOR \"x\"", "")).unwrap_err();
        assert_eq!(err.to_string(), "invalid data format: (null)");
    }

    #[test]
    fn test_bad_luminance() {
        for lum in ["\"1 2\"", "\"1 2 3 4\"", "\"a b c\""] {
            let header = format!(
                "COLOR_REP \"RGB_XYZ\"\nNORMALIZED_TO_Y_100 \"YES\"\nLUMINANCE_XYZ_CDM2 {lum}"
            );
            let err = load(&ti3(&header, "")).unwrap_err();
            assert!(matches!(err, LoadError::InvalidLuminanceFormat(_)), "{lum}");
        }

        let header = "COLOR_REP \"RGB_XYZ\"\nNORMALIZED_TO_Y_100 \"YES\"";
        match load(&ti3(header, "")) {
            Err(LoadError::InvalidLuminanceFormat(text)) => assert_eq!(text, "(null)"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_sheet_type() {
        let err = load(b"XYZZY\nCOLOR_REP \"XYZ\"\n").unwrap_err();
        assert!(matches!(err, LoadError::UnknownSheetType(ref s) if s == "XYZZY"));
    }

    #[test]
    fn test_malformed_table() {
        let err = load(b"").unwrap_err();
        assert!(matches!(err, LoadError::MalformedTable(_)));
    }

    #[test]
    fn test_number_of_sets_capped() {
        let bytes = b"CTI1\nCOLOR_REP \"RGB_XYZ\"\nNUMBER_OF_SETS 5\nBEGIN_DATA_FORMAT\n\
SAMPLE_ID RGB_R RGB_G RGB_B XYZ_X XYZ_Y XYZ_Z\nEND_DATA_FORMAT\nBEGIN_DATA\n\
1 1 0 0 1 2 3\nEND_DATA\n";
        let it8 = load(bytes).expect("load failed");
        assert_eq!(it8.data_count(), 1);
    }

    #[test]
    fn test_load_into_clears_on_failure() {
        let mut it8 = It8::with_kind(It8Kind::Ccmx);
        it8.set_matrix(Mat3x3::IDENTITY);
        it8.add_data(None, None);

        assert!(load_into(&mut it8, b"XYZZY\n").is_err());
        assert_eq!(it8.data_count(), 0);
        assert!(it8.matrix().is_zero());
    }

    #[test]
    fn test_load_into_replaces() {
        let mut it8 = It8::new();
        it8.add_data(None, None);
        it8.set_originator(Some("old"));

        let bytes = ti3("COLOR_REP \"RGB_XYZ\"", "1 1 1 1 1 1 1\n2 0 0 0 0 0 0\n");
        load_into(&mut it8, &bytes).expect("load failed");
        assert_eq!(it8.data_count(), 2);
        assert_eq!(it8.originator(), None);
    }
}
