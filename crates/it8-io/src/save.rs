//! Document to table.
//!
//! Header fields are written in a fixed order per kind. Normalized TI1/TI3
//! documents are expressed relative to the averaged white reading, which is
//! recorded in `LUMINANCE_XYZ_CDM2` so the loader can scale back.

use crate::error::{SaveError, SaveResult};
use it8_cgats::{Cgats, TabularAccessor, is_quotable};
use it8_core::{It8, It8Kind, WHITE_TOLERANCE, Xyz, Y_100};
use tracing::{debug, trace};

const READING_FIELDS: [&str; 7] = [
    "SAMPLE_ID", "RGB_R", "RGB_G", "RGB_B", "XYZ_X", "XYZ_Y", "XYZ_Z",
];
const MATRIX_FIELDS: [&str; 3] = ["XYZ_X", "XYZ_Y", "XYZ_Z"];

/// White point of a normalized document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Average XYZ of all white readings
    pub luminance: Xyz,
    /// Highest Y among white readings
    pub peak_y: f64,
    /// Number of white readings found
    pub samples: usize,
}

/// Serializes a document with the built-in CGATS writer.
///
/// The returned buffer ends with a NUL byte.
pub fn save(it8: &It8) -> SaveResult<Vec<u8>> {
    save_with::<Cgats>(it8)
}

/// Serializes a document with a custom table implementation.
pub fn save_with<T: TabularAccessor>(it8: &It8) -> SaveResult<Vec<u8>> {
    let table = to_table::<T>(it8)?;
    let mut bytes = table.to_bytes();
    if let Some(last) = bytes.last_mut() {
        if *last != 0 {
            *last = 0;
        }
    }
    Ok(bytes)
}

/// Builds a table from a document.
///
/// Text fields must fit on one line and may not contain both quote
/// characters, otherwise [`SaveError::UnquotableText`] is returned.
pub fn to_table<T: TabularAccessor>(it8: &It8) -> SaveResult<T> {
    check_text("ORIGINATOR", it8.originator())?;
    check_text("REFERENCE", it8.reference())?;
    check_text("INSTRUMENT", it8.instrument())?;

    let mut table = T::empty();
    if let Some(originator) = it8.originator() {
        table.set_property_str("ORIGINATOR", originator);
    }
    if let Some(reference) = it8.reference() {
        table.set_property_str("REFERENCE", reference);
    }

    debug!(kind = %it8.kind(), samples = it8.data_count(), "saving calibration table");
    match it8.kind() {
        It8Kind::Ti1 | It8Kind::Ti3 => save_readings(it8, &mut table)?,
        It8Kind::Ccmx => save_matrix(it8, &mut table),
    }
    Ok(table)
}

/// Averages all readings whose RGB is full white.
///
/// Returns [`SaveError::NoWhiteSample`] if no reading qualifies.
pub fn white_point(it8: &It8) -> SaveResult<WhitePoint> {
    let mut sum = Xyz::ZERO;
    let mut peak_y = 0.0_f64;
    let mut samples = 0_usize;

    for (rgb, xyz) in it8.samples().iter() {
        if !rgb.is_white(WHITE_TOLERANCE) {
            continue;
        }
        sum = sum + xyz;
        peak_y = peak_y.max(xyz.y);
        samples += 1;
    }

    if samples == 0 {
        return Err(SaveError::NoWhiteSample);
    }
    Ok(WhitePoint {
        luminance: sum / samples as f64,
        peak_y,
        samples,
    })
}

fn save_readings<T: TabularAccessor>(it8: &It8, table: &mut T) -> SaveResult<()> {
    let kind = it8.kind();

    // Scale factors are derived from the text actually written so that the
    // loader's arithmetic inverts them exactly.
    let luminance = if it8.normalized() {
        let white = white_point(it8)?;
        debug!(
            samples = white.samples,
            peak_y = white.peak_y,
            y = white.luminance.y,
            "white point"
        );
        let text = format_luminance(white.luminance);
        let written = parse_written(&text, white.luminance);
        if written.x == 0.0 || written.y == 0.0 || written.z == 0.0 {
            return Err(SaveError::DegenerateWhitePoint(text));
        }
        Some((text, written))
    } else {
        None
    };

    table.set_sheet_type(kind.sheet_type());
    table.set_property_str("DESCRIPTOR", kind.descriptor());
    if kind == It8Kind::Ti3 {
        table.set_property_str("DEVICE_CLASS", "DISPLAY");
    }
    table.set_property_str("COLOR_REP", "RGB_XYZ");
    if let Some(instrument) = it8.instrument() {
        table.set_property_str("TARGET_INSTRUMENT", instrument);
    }
    table.set_property_str("INSTRUMENT_TYPE_SPECTRAL", yes_no(it8.spectral()));
    table.set_property_str("NORMALIZED_TO_Y_100", yes_no(luminance.is_some()));
    if let Some((text, _)) = &luminance {
        table.set_property_str("LUMINANCE_XYZ_CDM2", text);
    }
    table.set_property_f64("NUMBER_OF_FIELDS", READING_FIELDS.len() as f64);
    table.set_property_f64("NUMBER_OF_SETS", it8.data_count() as f64);
    for (col, name) in READING_FIELDS.iter().enumerate() {
        table.set_data_format(col, name);
    }

    for (row, (mut rgb, mut xyz)) in it8.samples().iter().enumerate() {
        if let Some((_, lum)) = &luminance {
            rgb = rgb * Y_100;
            xyz = xyz.div_components(*lum) * Y_100;
        }
        trace!(row, ?rgb, ?xyz, "writing reading");
        table.set_cell(row, 0, (row + 1) as f64);
        table.set_cell(row, 1, rgb.r);
        table.set_cell(row, 2, rgb.g);
        table.set_cell(row, 3, rgb.b);
        table.set_cell(row, 4, xyz.x);
        table.set_cell(row, 5, xyz.y);
        table.set_cell(row, 6, xyz.z);
    }

    Ok(())
}

fn save_matrix<T: TabularAccessor>(it8: &It8, table: &mut T) {
    table.set_sheet_type(It8Kind::Ccmx.sheet_type());
    table.set_property_str("DESCRIPTOR", It8Kind::Ccmx.descriptor());
    table.set_property_str("COLOR_REP", "XYZ");
    table.set_property_f64("NUMBER_OF_FIELDS", MATRIX_FIELDS.len() as f64);
    table.set_property_f64("NUMBER_OF_SETS", 3.0);
    for (col, name) in MATRIX_FIELDS.iter().enumerate() {
        table.set_data_format(col, name);
    }
    if let Some(instrument) = it8.instrument() {
        table.set_property_str("INSTRUMENT", instrument);
    }

    let matrix = it8.matrix();
    for row in 0..3 {
        for col in 0..3 {
            table.set_cell(row, col, matrix[(row, col)]);
        }
    }
}

fn check_text(key: &'static str, value: Option<&str>) -> SaveResult<()> {
    match value {
        Some(value) if !is_quotable(value) => Err(SaveError::UnquotableText {
            key,
            value: value.to_owned(),
        }),
        _ => Ok(()),
    }
}

/// Formats a white point as three `%f`-style decimals.
fn format_luminance(lum: Xyz) -> String {
    format!("{:.6} {:.6} {:.6}", lum.x, lum.y, lum.z)
}

/// Reads back the luminance text, falling back to the exact value.
fn parse_written(text: &str, exact: Xyz) -> Xyz {
    let mut parts = text.split(' ').map(|s| s.parse::<f64>().ok());
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Some(x)), Some(Some(y)), Some(Some(z))) => Xyz::new(x, y, z),
        _ => exact,
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "YES" } else { "NO" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use it8_core::{Mat3x3, Rgb};

    fn as_text(bytes: &[u8]) -> &str {
        std::str::from_utf8(bytes.strip_suffix(&[0]).unwrap_or(bytes)).unwrap()
    }

    #[test]
    fn test_white_point_average() {
        let mut it8 = It8::with_kind(It8Kind::Ti3);
        it8.add_data(Some(Rgb::WHITE), Some(Xyz::new(90.0, 100.0, 110.0)));
        it8.add_data(Some(Rgb::new(0.995, 1.0, 1.01)), Some(Xyz::new(100.0, 110.0, 120.0)));
        it8.add_data(Some(Rgb::new(0.5, 0.5, 0.5)), Some(Xyz::new(1.0, 1.0, 1.0)));

        let white = white_point(&it8).unwrap();
        assert_eq!(white.samples, 2);
        assert_abs_diff_eq!(white.luminance.x, 95.0, epsilon = 1e-9);
        assert_abs_diff_eq!(white.luminance.y, 105.0, epsilon = 1e-9);
        assert_abs_diff_eq!(white.peak_y, 110.0);
    }

    #[test]
    fn test_tolerance_boundary() {
        let mut it8 = It8::new();
        it8.add_data(Some(Rgb::new(0.98, 1.0, 1.0)), Some(Xyz::new(1.0, 1.0, 1.0)));
        assert!(matches!(white_point(&it8), Err(SaveError::NoWhiteSample)));

        it8.add_data(Some(Rgb::new(0.99, 1.0, 1.0)), Some(Xyz::new(2.0, 2.0, 2.0)));
        assert_eq!(white_point(&it8).unwrap().samples, 1);
    }

    #[test]
    fn test_normalized_without_white() {
        let mut it8 = It8::new();
        it8.set_normalized(true);
        it8.add_data(Some(Rgb::BLACK), Some(Xyz::ZERO));
        assert!(matches!(save(&it8), Err(SaveError::NoWhiteSample)));
    }

    #[test]
    fn test_degenerate_white_point() {
        let mut it8 = It8::new();
        it8.set_normalized(true);
        it8.add_data(Some(Rgb::WHITE), Some(Xyz::new(95.0, 100.0, 0.0)));
        assert!(matches!(save(&it8), Err(SaveError::DegenerateWhitePoint(_))));
    }

    #[test]
    fn test_unquotable_text() {
        let mut it8 = It8::with_kind(It8Kind::Ccmx);
        it8.set_instrument(Some("say \"it's\""));
        assert!(matches!(
            save(&it8),
            Err(SaveError::UnquotableText { key: "INSTRUMENT", .. })
        ));

        it8.set_instrument(Some("Huey"));
        it8.set_originator(Some("a\r\nb"));
        assert!(matches!(
            save(&it8),
            Err(SaveError::UnquotableText { key: "ORIGINATOR", .. })
        ));
    }

    #[test]
    fn test_ti3_header_order() {
        let mut it8 = It8::with_kind(It8Kind::Ti3);
        it8.set_originator(Some("cd-self-test"));
        it8.set_instrument(Some("huey"));
        it8.add_data(Some(Rgb::WHITE), Some(Xyz::new(95.0, 100.0, 108.9)));

        let bytes = save(&it8).unwrap();
        assert_eq!(bytes.last(), Some(&0));

        let keys: Vec<&str> = as_text(&bytes)
            .lines()
            .skip(2)
            .map_while(|l| l.split('\t').next().filter(|k| *k != "BEGIN_DATA_FORMAT"))
            .collect();
        assert_eq!(
            keys,
            [
                "ORIGINATOR",
                "DESCRIPTOR",
                "DEVICE_CLASS",
                "COLOR_REP",
                "TARGET_INSTRUMENT",
                "INSTRUMENT_TYPE_SPECTRAL",
                "NORMALIZED_TO_Y_100",
                "NUMBER_OF_FIELDS",
            ]
        );
        assert!(as_text(&bytes).starts_with("CTI3\n"));
        assert!(as_text(&bytes).contains("1\t1\t1\t1\t95\t100\t108.9\n"));
    }

    #[test]
    fn test_ti1_has_no_device_class() {
        let it8 = It8::with_kind(It8Kind::Ti1);
        let text = String::from_utf8(save(&it8).unwrap()).unwrap();
        assert!(text.starts_with("CTI1\n"));
        assert!(!text.contains("DEVICE_CLASS"));
        assert!(text.contains("NORMALIZED_TO_Y_100\t\"NO\""));
        assert!(text.contains("NUMBER_OF_SETS\t0"));
    }

    #[test]
    fn test_normalized_output() {
        let mut it8 = It8::with_kind(It8Kind::Ti3);
        it8.set_normalized(true);
        it8.add_data(Some(Rgb::WHITE), Some(Xyz::new(190.0, 200.0, 217.8)));
        it8.add_data(Some(Rgb::new(0.5, 0.25, 0.0)), Some(Xyz::new(95.0, 100.0, 108.9)));

        let bytes = save(&it8).unwrap();
        let text = as_text(&bytes);
        assert!(text.contains("LUMINANCE_XYZ_CDM2\t\"190.000000 200.000000 217.800000\""));
        assert!(text.contains("1\t100\t100\t100\t100\t100\t100\n"));

        let table = Cgats::parse(&bytes).unwrap();
        assert_abs_diff_eq!(table.cell(1, 1), 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(table.cell(1, 4), 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(table.cell(1, 6), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ccmx_layout() {
        let mut it8 = It8::with_kind(It8Kind::Ccmx);
        it8.set_instrument(Some("i1 Display Pro"));
        it8.set_matrix(Mat3x3::from_row_major([
            1.0, 0.5, 0.25, 0.0, 1.0, 0.0, -0.125, 0.0, 2.0,
        ]));

        let bytes = save(&it8).unwrap();
        let text = as_text(&bytes);
        assert!(text.starts_with("CCMX\n"));
        assert!(text.contains("DESCRIPTOR\t\"Device Correction Matrix\""));
        assert!(text.contains("COLOR_REP\t\"XYZ\""));
        assert!(text.contains("INSTRUMENT\t\"i1 Display Pro\""));
        assert!(text.contains("NUMBER_OF_SETS\t3"));
        assert!(text.contains("XYZ_X\tXYZ_Y\tXYZ_Z"));
        assert!(text.contains("-0.125\t0\t2\n"));
    }
}
