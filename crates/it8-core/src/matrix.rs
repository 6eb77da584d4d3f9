//! 3x3 correction matrix.
//!
//! [`Mat3x3`] holds the device correction matrix carried by CCMX files.
//!
//! Elements are stored row-major. Row `i` of the matrix is data row `i` of
//! a CCMX file, and `(row, col)` indexing reads the same way.
//!
//! ```rust
//! use it8_core::Mat3x3;
//!
//! let mut ccmx = Mat3x3::from_row_major([1.02, -0.01, 0.0, 0.0, 0.98, 0.01, 0.0, 0.0, 1.05]);
//! assert_eq!(ccmx[(1, 2)], 0.01);
//! ccmx.clear();
//! assert!(ccmx.is_zero());
//! ```

use std::ops::{Index, IndexMut};

/// A row-major 3x3 matrix of `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3x3 {
    /// Matrix elements: [row0, row1, row2]
    pub m: [[f64; 3]; 3],
}

impl Mat3x3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from nine row-major values.
    #[inline]
    pub const fn from_row_major(v: [f64; 9]) -> Self {
        Self::from_rows([[v[0], v[1], v[2]], [v[3], v[4], v[5]], [v[6], v[7], v[8]]])
    }

    /// Resets every element to zero.
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::ZERO;
    }

    /// Returns true if every element is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.m.iter().flatten().all(|v| *v == 0.0)
    }

    /// Returns true if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }
}

impl Index<(usize, usize)> for Mat3x3 {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.m[row][col]
    }
}

impl IndexMut<(usize, usize)> for Mat3x3 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.m[row][col]
    }
}
