//! The in-memory calibration document.
//!
//! [`It8`] mirrors one TI1, TI3 or CCMX file. It has no behavior beyond
//! holding data; reading and writing the text form lives in `it8-io`.
//!
//! # Lifecycle
//!
//! A document starts empty (optionally with a kind), gets filled either by
//! the loader or by [`It8::add_data`] / [`It8::set_matrix`], and is then
//! handed to the saver or read back through [`It8::data_at`] and
//! [`It8::matrix`].
//!
//! ```rust
//! use it8_core::{It8, It8Kind, Rgb, Xyz};
//!
//! let mut it8 = It8::with_kind(It8Kind::Ti3);
//! it8.set_originator(Some("cd-self-test"));
//! it8.set_normalized(true);
//! it8.add_data(Some(Rgb::WHITE), Some(Xyz::new(95.0, 100.0, 108.9)));
//!
//! assert_eq!(it8.data_count(), 1);
//! assert_eq!(it8.originator(), Some("cd-self-test"));
//! ```

use crate::{It8Kind, Mat3x3, Result, Rgb, SampleStore, Xyz};

/// An IT8 calibration document.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct It8 {
    kind: It8Kind,
    normalized: bool,
    spectral: bool,
    instrument: Option<String>,
    reference: Option<String>,
    originator: Option<String>,
    matrix: Mat3x3,
    samples: SampleStore,
}

impl It8 {
    /// Creates an empty TI1 document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document of the given kind.
    pub fn with_kind(kind: It8Kind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Document kind.
    #[inline]
    pub fn kind(&self) -> It8Kind {
        self.kind
    }

    /// Sets the document kind.
    #[inline]
    pub fn set_kind(&mut self, kind: It8Kind) {
        self.kind = kind;
    }

    /// Whether readings are written relative to a Y=100 white point.
    #[inline]
    pub fn normalized(&self) -> bool {
        self.normalized
    }

    /// Sets whether readings are written normalized to Y=100.
    #[inline]
    pub fn set_normalized(&mut self, normalized: bool) {
        self.normalized = normalized;
    }

    /// Whether the measuring instrument is spectral.
    #[inline]
    pub fn spectral(&self) -> bool {
        self.spectral
    }

    /// Sets whether the measuring instrument is spectral.
    #[inline]
    pub fn set_spectral(&mut self, spectral: bool) {
        self.spectral = spectral;
    }

    /// Instrument that produced the readings, e.g. "huey".
    #[inline]
    pub fn instrument(&self) -> Option<&str> {
        self.instrument.as_deref()
    }

    /// Sets the instrument name. `None` omits the field on save.
    pub fn set_instrument(&mut self, instrument: Option<&str>) {
        self.instrument = instrument.map(str::to_owned);
    }

    /// Reference the readings were made against, e.g. "colormunki".
    #[inline]
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Sets the reference. `None` omits the field on save.
    pub fn set_reference(&mut self, reference: Option<&str>) {
        self.reference = reference.map(str::to_owned);
    }

    /// Program that created the file, e.g. "gcm-calibrate".
    #[inline]
    pub fn originator(&self) -> Option<&str> {
        self.originator.as_deref()
    }

    /// Sets the originator. `None` omits the field on save.
    pub fn set_originator(&mut self, originator: Option<&str>) {
        self.originator = originator.map(str::to_owned);
    }

    /// Correction matrix (CCMX only, zero otherwise).
    #[inline]
    pub fn matrix(&self) -> &Mat3x3 {
        &self.matrix
    }

    /// Sets the correction matrix.
    #[inline]
    pub fn set_matrix(&mut self, matrix: Mat3x3) {
        self.matrix = matrix;
    }

    /// Appends one reading. A missing half is stored as (0, 0, 0).
    pub fn add_data(&mut self, rgb: Option<Rgb>, xyz: Option<Xyz>) {
        self.samples.push(rgb, xyz);
    }

    /// Number of stored readings.
    #[inline]
    pub fn data_count(&self) -> usize {
        self.samples.len()
    }

    /// Returns reading `index` as absolute (never normalized) values.
    pub fn data_at(&self, index: usize) -> Result<(Rgb, Xyz)> {
        self.samples.get(index)
    }

    /// All readings.
    #[inline]
    pub fn samples(&self) -> &SampleStore {
        &self.samples
    }

    /// Drops all readings and zeroes the matrix, keeping kind and metadata.
    ///
    /// The loader calls this before repopulating a document.
    pub fn clear_data(&mut self) {
        self.samples.clear();
        self.matrix.clear();
    }
}
