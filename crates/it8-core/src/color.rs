//! Color triplets stored in calibration documents.
//!
//! Two plain `f64` triplets cover everything an IT8 file carries:
//!
//! - [`Rgb`] - device values sent to the display or printed on a chart
//! - [`Xyz`] - CIE 1931 tristimulus values measured by an instrument
//!
//! Both are `Copy` and default to the zero triple, which is what
//! [`crate::SampleStore::push`] substitutes for a missing half.
//!
//! # Usage
//!
//! ```rust
//! use it8_core::{Rgb, Xyz};
//!
//! let white = Rgb::WHITE;
//! assert!(white.is_white(0.01));
//!
//! let d65 = Xyz::new(95.047, 100.0, 108.883);
//! let half = d65.scale(0.5);
//! assert_eq!(half.y, 50.0);
//! ```

use std::ops::{Add, Div, Mul};

/// Device RGB triplet.
///
/// Target charts (TI1) use the nominal `[0, 1]` range. Files that are
/// normalized store these as percentages; the loader converts back.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red component
    pub r: f64,
    /// Green component
    pub g: f64,
    /// Blue component
    pub b: f64,
}

impl Rgb {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Full white (1, 1, 1).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new RGB triplet.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates an RGB triplet from an array.
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Scales all components by a factor.
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    /// Returns true if every component is within `tolerance` of `target`.
    ///
    /// The bound is inclusive. One `f64::EPSILON` of slack keeps decimal
    /// inputs such as `0.99` on the inside of a `0.01` tolerance.
    #[inline]
    pub fn matches(&self, target: Rgb, tolerance: f64) -> bool {
        let limit = tolerance + f64::EPSILON;
        (self.r - target.r).abs() <= limit
            && (self.g - target.g).abs() <= limit
            && (self.b - target.b).abs() <= limit
    }

    /// Returns true if this is a full-white device value within `tolerance`.
    #[inline]
    pub fn is_white(&self, tolerance: f64) -> bool {
        self.matches(Self::WHITE, tolerance)
    }
}

impl From<[f64; 3]> for Rgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl Mul<f64> for Rgb {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Div<f64> for Rgb {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.r / rhs, self.g / rhs, self.b / rhs)
    }
}

/// CIE 1931 XYZ tristimulus triplet.
///
/// Absolute readings are in cd/m² unless the owning document says they are
/// normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl Xyz {
    /// Zero triplet.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new XYZ triplet.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates an XYZ triplet from an array.
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Scales all components by a factor.
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Component-wise product.
    #[inline]
    pub fn mul_components(&self, other: Xyz) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Component-wise quotient.
    #[inline]
    pub fn div_components(&self, other: Xyz) -> Self {
        Self::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }

    /// Returns true if approximately equal to another triplet.
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}

impl Add for Xyz {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<f64> for Xyz {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Div<f64> for Xyz {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}
