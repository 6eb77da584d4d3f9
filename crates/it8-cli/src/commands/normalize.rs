//! Normalize command: re-saves TI1/TI3 readings relative to Y=100.

use crate::NormalizeArgs;
use anyhow::{Result, bail};
use tracing::info;

/// Runs the normalize command.
pub fn run(args: NormalizeArgs) -> Result<()> {
    let mut it8 = super::load_it8(&args.input)?;
    if !it8.kind().has_readings() {
        bail!(
            "{} is a {} file; only TI1/TI3 readings can be normalized",
            args.input.display(),
            it8.kind().sheet_type()
        );
    }

    let normalized = !args.off;
    if normalized {
        let white = it8_io::white_point(&it8)?;
        info!(
            samples = white.samples,
            peak_y = white.peak_y,
            "normalizing against white point"
        );
    }
    it8.set_normalized(normalized);

    super::save_it8(&args.output, &it8)?;
    println!(
        "{} -> {} (normalized: {})",
        args.input.display(),
        args.output.display(),
        super::yes_no(normalized)
    );
    Ok(())
}
