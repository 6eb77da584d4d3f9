//! CCMX command: writes a correction matrix file.

use crate::CcmxArgs;
use anyhow::{Result, bail};
use it8_core::{It8, It8Kind, Mat3x3};
use tracing::{debug, warn};

/// Determinants below this are reported as singular.
const SINGULAR_EPSILON: f64 = 1e-12;

fn determinant(m: &Mat3x3) -> f64 {
    let m = &m.m;
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Builds the document written by the command.
fn build(args: &CcmxArgs) -> Result<It8> {
    let values: [f64; 9] = match args.matrix.as_slice().try_into() {
        Ok(values) => values,
        Err(_) => bail!("--matrix needs 9 values, got {}", args.matrix.len()),
    };
    let matrix = Mat3x3::from_row_major(values);
    if !matrix.is_finite() {
        bail!("matrix values must be finite");
    }
    let det = determinant(&matrix);
    if det.abs() < SINGULAR_EPSILON {
        warn!(det, "matrix is singular");
    }

    let mut it8 = It8::with_kind(It8Kind::Ccmx);
    it8.set_matrix(matrix);
    it8.set_instrument(args.instrument.as_deref());
    it8.set_originator(args.originator.as_deref());
    it8.set_reference(args.reference.as_deref());
    Ok(it8)
}

/// Runs the ccmx command.
pub fn run(args: CcmxArgs) -> Result<()> {
    if let Some(kind) = it8_io::detect_kind(&args.output) {
        if kind != It8Kind::Ccmx {
            warn!(path = %args.output.display(), %kind, "output extension is not .ccmx");
        }
    }

    let it8 = build(&args)?;
    debug!(matrix = ?it8.matrix(), "writing correction matrix");
    super::save_it8(&args.output, &it8)?;
    println!("Wrote {}", args.output.display());
    Ok(())
}
