//! Dump command: prints every reading or the correction matrix.

use crate::DumpArgs;
use anyhow::Result;
use it8_core::{It8, Rgb, Xyz};
use serde::Serialize;

#[derive(Serialize)]
struct Reading {
    id: usize,
    rgb: Rgb,
    xyz: Xyz,
}

fn readings(it8: &It8) -> Vec<Reading> {
    it8.samples()
        .iter()
        .enumerate()
        .map(|(i, (rgb, xyz))| Reading { id: i + 1, rgb, xyz })
        .collect()
}

/// Runs the dump command.
pub fn run(args: DumpArgs) -> Result<()> {
    let it8 = super::load_it8(&args.input)?;
    let has_readings = it8.kind().has_readings();

    if args.json {
        let json = if has_readings {
            serde_json::to_string_pretty(&readings(&it8))?
        } else {
            serde_json::to_string_pretty(it8.matrix())?
        };
        println!("{json}");
        return Ok(());
    }

    if !has_readings {
        super::info::print_matrix(it8.matrix());
        return Ok(());
    }

    println!(
        "{:>5} {:>9} {:>9} {:>9} {:>12} {:>12} {:>12}",
        "ID", "R", "G", "B", "X", "Y", "Z"
    );
    for r in readings(&it8) {
        println!(
            "{:>5} {:>9.5} {:>9.5} {:>9.5} {:>12.6} {:>12.6} {:>12.6}",
            r.id, r.rgb.r, r.rgb.g, r.rgb.b, r.xyz.x, r.xyz.y, r.xyz.z
        );
    }
    Ok(())
}
