//! Calibration file info command.
//!
//! Displays kind, metadata, flags and either the reading count or the
//! correction matrix.

use crate::InfoArgs;
use anyhow::Result;
use it8_core::{It8, It8Kind, Mat3x3};
use serde::Serialize;
use std::path::Path;

/// Summary printed by `--json`.
#[derive(Serialize)]
struct Summary<'a> {
    file: String,
    kind: It8Kind,
    originator: Option<&'a str>,
    reference: Option<&'a str>,
    instrument: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    spectral: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    samples: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matrix: Option<&'a Mat3x3>,
}

impl<'a> Summary<'a> {
    fn new(path: &Path, it8: &'a It8) -> Self {
        let readings = it8.kind().has_readings();
        Self {
            file: path.display().to_string(),
            kind: it8.kind(),
            originator: it8.originator(),
            reference: it8.reference(),
            instrument: it8.instrument(),
            normalized: readings.then(|| it8.normalized()),
            spectral: readings.then(|| it8.spectral()),
            samples: readings.then(|| it8.data_count()),
            matrix: (!readings).then(|| it8.matrix()),
        }
    }
}

/// Runs the info command.
pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    for path in &args.input {
        let it8 = super::load_it8(path)?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&Summary::new(path, &it8))?);
        } else {
            print_text(path, &it8, verbose);
        }

        if args.input.len() > 1 {
            println!();
        }
    }

    Ok(())
}

/// Prints info in human-readable text format.
fn print_text(path: &Path, it8: &It8, verbose: bool) {
    println!("{}", path.display());
    println!("  Kind:        {} ({})", it8.kind().sheet_type(), it8.kind());
    println!("  Originator:  {}", super::or_unset(it8.originator()));
    println!("  Reference:   {}", super::or_unset(it8.reference()));
    println!("  Instrument:  {}", super::or_unset(it8.instrument()));

    if it8.kind().has_readings() {
        println!("  Normalized:  {}", super::yes_no(it8.normalized()));
        println!("  Spectral:    {}", super::yes_no(it8.spectral()));
        println!("  Samples:     {}", it8.data_count());

        if verbose && it8.normalized() {
            match it8_io::white_point(it8) {
                Ok(white) => println!(
                    "  White:       {:.6} {:.6} {:.6} ({} samples)",
                    white.luminance.x, white.luminance.y, white.luminance.z, white.samples
                ),
                Err(e) => println!("  White:       {e}"),
            }
        }
    } else {
        println!("  Matrix:");
        print_matrix(it8.matrix());
    }
}

/// Prints a matrix one row per line.
pub fn print_matrix(m: &Mat3x3) {
    for row in 0..3 {
        println!(
            "    {:>12.6} {:>12.6} {:>12.6}",
            m[(row, 0)],
            m[(row, 1)],
            m[(row, 2)]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use it8_core::{Rgb, Xyz};

    #[test]
    fn test_summary_readings() {
        let mut it8 = It8::with_kind(It8Kind::Ti3);
        it8.set_originator(Some("test"));
        it8.add_data(Some(Rgb::WHITE), Some(Xyz::new(95.0, 100.0, 108.9)));

        let json = serde_json::to_value(Summary::new(Path::new("a.ti3"), &it8)).unwrap();
        assert_eq!(json["kind"], "Ti3");
        assert_eq!(json["originator"], "test");
        assert_eq!(json["samples"], 1);
        assert!(json.get("matrix").is_none());
    }

    #[test]
    fn test_summary_matrix() {
        let mut it8 = It8::with_kind(It8Kind::Ccmx);
        it8.set_matrix(Mat3x3::IDENTITY);

        let json = serde_json::to_value(Summary::new(Path::new("a.ccmx"), &it8)).unwrap();
        assert_eq!(json["kind"], "Ccmx");
        assert!(json.get("samples").is_none());
        assert!(json["instrument"].is_null());
        assert_eq!(json["matrix"]["m"][1][1], 1.0);
    }
}
