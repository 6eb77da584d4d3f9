//! Reading and writing calibration files on disk.

use crate::error::{It8IoResult, LoadError, SaveError};
use crate::{load, save};
use it8_core::{It8, It8Kind};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Reads and parses a calibration file.
pub fn read_file<P: AsRef<Path>>(path: P) -> It8IoResult<It8> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(LoadError::from)?;
    debug!(path = %path.display(), size = bytes.len(), "read calibration file");
    Ok(load(&bytes)?)
}

/// Serializes a document and atomically replaces `path` with it.
///
/// The data is written to a temporary file in the same directory and then
/// renamed over the destination.
pub fn write_file<P: AsRef<Path>>(path: P, it8: &It8) -> It8IoResult<()> {
    let path = path.as_ref();
    let bytes = save(it8)?;
    let text = bytes.strip_suffix(&[0]).unwrap_or(&bytes);

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(SaveError::from)?;
    tmp.write_all(text).map_err(SaveError::from)?;
    tmp.as_file().sync_all().map_err(SaveError::from)?;
    tmp.persist(path)
        .map_err(|e| SaveError::from(e.error))?;

    debug!(path = %path.display(), size = text.len(), "wrote calibration file");
    Ok(())
}

/// Guesses the document kind from a file extension (case-insensitive).
pub fn detect_kind<P: AsRef<Path>>(path: P) -> Option<It8Kind> {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())?;

    It8Kind::ALL.into_iter().find(|kind| kind.extension() == ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use it8_core::{Mat3x3, Rgb, Xyz};

    #[test]
    fn test_detect_kind() {
        assert_eq!(detect_kind("display.ti1"), Some(It8Kind::Ti1));
        assert_eq!(detect_kind("/tmp/results.TI3"), Some(It8Kind::Ti3));
        assert_eq!(detect_kind("huey.ccmx"), Some(It8Kind::Ccmx));
        assert_eq!(detect_kind("profile.icc"), None);
        assert_eq!(detect_kind("noext"), None);
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.ti3");

        let mut it8 = It8::with_kind(It8Kind::Ti3);
        it8.set_originator(Some("file-test"));
        it8.add_data(Some(Rgb::WHITE), Some(Xyz::new(95.0, 100.0, 108.9)));
        write_file(&path, &it8).unwrap();

        let raw = fs::read(&path).unwrap();
        assert_ne!(raw.last(), Some(&0));

        let back = read_file(&path).unwrap();
        assert_eq!(back, it8);
    }

    #[test]
    fn test_write_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.ccmx");
        fs::write(&path, "stale").unwrap();

        let mut it8 = It8::with_kind(It8Kind::Ccmx);
        it8.set_matrix(Mat3x3::IDENTITY);
        write_file(&path, &it8).unwrap();

        let back = read_file(&path).unwrap();
        assert_eq!(back.matrix(), &Mat3x3::IDENTITY);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(dir.path().join("missing.ti1")).unwrap_err();
        assert!(matches!(
            err,
            crate::It8IoError::Load(LoadError::Io(_))
        ));
    }
}
