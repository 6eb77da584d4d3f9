//! CLI command implementations

pub mod ccmx;
pub mod dump;
pub mod info;
pub mod normalize;

use anyhow::{Context, Result};
use it8_core::It8;
use std::path::Path;

/// Load calibration file from path
pub fn load_it8(path: &Path) -> Result<It8> {
    it8_io::read_file(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save calibration file to path
pub fn save_it8(path: &Path, it8: &It8) -> Result<()> {
    it8_io::write_file(path, it8).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Renders optional metadata for display
pub fn or_unset(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Renders a boolean flag for display
pub fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
