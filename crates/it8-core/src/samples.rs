//! Paired RGB/XYZ readings.
//!
//! [`SampleStore`] keeps two parallel sequences, one of device values and
//! one of measured tristimulus values. Index `i` in both refers to the same
//! physical reading, so the two sequences always have the same length.
//!
//! # Usage
//!
//! ```rust
//! use it8_core::{Rgb, SampleStore, Xyz};
//!
//! let mut store = SampleStore::new();
//! store.push(Some(Rgb::WHITE), Some(Xyz::new(95.0, 100.0, 108.9)));
//! store.push(None, None);
//!
//! assert_eq!(store.len(), 2);
//! assert_eq!(store.get(1).unwrap(), (Rgb::BLACK, Xyz::ZERO));
//! ```

use crate::{It8Error, Result, Rgb, Xyz};

/// Ordered collection of (RGB, XYZ) readings.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleStore {
    rgb: Vec<Rgb>,
    xyz: Vec<Xyz>,
}

impl SampleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one reading.
    ///
    /// A missing half is stored as the zero triple.
    pub fn push(&mut self, rgb: Option<Rgb>, xyz: Option<Xyz>) {
        self.rgb.push(rgb.unwrap_or_default());
        self.xyz.push(xyz.unwrap_or_default());
    }

    /// Number of stored readings.
    #[inline]
    pub fn len(&self) -> usize {
        self.xyz.len()
    }

    /// Returns true if no readings are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xyz.is_empty()
    }

    /// Returns reading `index`.
    pub fn get(&self, index: usize) -> Result<(Rgb, Xyz)> {
        if index >= self.len() {
            return Err(It8Error::index_out_of_range(index, self.len()));
        }
        Ok((self.rgb[index], self.xyz[index]))
    }

    /// Removes all readings.
    pub fn clear(&mut self) {
        self.rgb.clear();
        self.xyz.clear();
    }

    /// Device values, in reading order.
    #[inline]
    pub fn rgb(&self) -> &[Rgb] {
        &self.rgb
    }

    /// Measured values, in reading order.
    #[inline]
    pub fn xyz(&self) -> &[Xyz] {
        &self.xyz
    }

    /// Iterates over readings as pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Rgb, Xyz)> + '_ {
        self.rgb.iter().copied().zip(self.xyz.iter().copied())
    }
}

impl Extend<(Rgb, Xyz)> for SampleStore {
    fn extend<I: IntoIterator<Item = (Rgb, Xyz)>>(&mut self, iter: I) {
        for (rgb, xyz) in iter {
            self.push(Some(rgb), Some(xyz));
        }
    }
}

impl FromIterator<(Rgb, Xyz)> for SampleStore {
    fn from_iter<I: IntoIterator<Item = (Rgb, Xyz)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_missing_halves() {
        let mut store = SampleStore::new();
        store.push(Some(Rgb::new(0.5, 0.5, 0.5)), None);
        store.push(None, Some(Xyz::new(1.0, 2.0, 3.0)));

        assert_eq!(store.len(), 2);
        assert_eq!(store.rgb().len(), store.xyz().len());
        assert_eq!(store.get(0).unwrap().1, Xyz::ZERO);
        assert_eq!(store.get(1).unwrap().0, Rgb::BLACK);
    }

    #[test]
    fn test_strict_bounds() {
        let mut store = SampleStore::new();
        store.push(Some(Rgb::WHITE), Some(Xyz::new(1.0, 1.0, 1.0)));

        assert!(store.get(0).is_ok());
        assert_eq!(
            store.get(1),
            Err(It8Error::IndexOutOfRange { index: 1, count: 1 })
        );
    }

    #[test]
    fn test_clear() {
        let mut store: SampleStore = vec![(Rgb::WHITE, Xyz::new(1.0, 1.0, 1.0))]
            .into_iter()
            .collect();
        assert!(!store.is_empty());
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.iter().len(), 0);
    }
}
