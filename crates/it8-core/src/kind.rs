//! IT8 document kinds.

use std::fmt;

/// The kind of calibration document an IT8 file carries.
///
/// The kind decides which parts of an [`crate::It8`] are meaningful:
/// TI1 and TI3 carry RGB/XYZ readings, CCMX carries a 3x3 matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum It8Kind {
    /// Target chart information (`CTI1`).
    #[default]
    Ti1,
    /// Measured chart results (`CTI3`).
    Ti3,
    /// Device correction matrix (`CCMX`).
    Ccmx,
}

impl It8Kind {
    /// All kinds, in sheet-type detection priority order.
    pub const ALL: [It8Kind; 3] = [It8Kind::Ti1, It8Kind::Ti3, It8Kind::Ccmx];

    /// Sheet-type tag written on the first line of the file.
    pub const fn sheet_type(self) -> &'static str {
        match self {
            Self::Ti1 => "CTI1",
            Self::Ti3 => "CTI3",
            Self::Ccmx => "CCMX",
        }
    }

    /// `DESCRIPTOR` text written for this kind.
    pub const fn descriptor(self) -> &'static str {
        match self {
            Self::Ti1 => "Calibration Target chart information 1",
            Self::Ti3 => "Calibration Target chart information 3",
            Self::Ccmx => "Device Correction Matrix",
        }
    }

    /// Conventional file extension, without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Ti1 => "ti1",
            Self::Ti3 => "ti3",
            Self::Ccmx => "ccmx",
        }
    }

    /// Returns true for kinds that carry RGB/XYZ readings.
    #[inline]
    pub const fn has_readings(self) -> bool {
        matches!(self, Self::Ti1 | Self::Ti3)
    }
}

impl fmt::Display for It8Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_types() {
        assert_eq!(It8Kind::Ti1.sheet_type(), "CTI1");
        assert_eq!(It8Kind::Ti3.sheet_type(), "CTI3");
        assert_eq!(It8Kind::Ccmx.sheet_type(), "CCMX");
    }

    #[test]
    fn test_readings() {
        assert!(It8Kind::Ti1.has_readings());
        assert!(It8Kind::Ti3.has_readings());
        assert!(!It8Kind::Ccmx.has_readings());
        assert_eq!(It8Kind::default(), It8Kind::Ti1);
        assert_eq!(It8Kind::Ccmx.to_string(), "ccmx");
    }
}
