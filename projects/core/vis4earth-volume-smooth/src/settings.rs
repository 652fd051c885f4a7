//! Smoothing Settings
//!
//! This module contains the configuration structures for smoothing operations.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;
use thiserror::Error;

/// Which neighbourhood a voxel is smoothed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum SmoothDimension {
    /// 3x3 window within the voxel's own Z slice.
    Xy,
    /// 3x3x3 window across neighbouring slices.
    Xyz,
}

/// How the neighbourhood is reduced to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum SmoothKind {
    /// Largest neighbour.
    Max,
    /// Arithmetic mean of the neighbours, rounded to nearest for integer voxels.
    Average,
}

/// Settings for a smoothing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SmoothSettings {
    /// Neighbourhood shape.
    pub dimension: SmoothDimension,

    /// Reduction applied to the neighbourhood.
    pub kind: SmoothKind,
}

impl Default for SmoothSettings {
    fn default() -> Self {
        Self {
            dimension: SmoothDimension::Xyz,
            kind: SmoothKind::Average,
        }
    }
}

impl SmoothSettings {
    /// Creates settings from a shape and a reduction.
    pub const fn new(dimension: SmoothDimension, kind: SmoothKind) -> Self {
        Self { dimension, kind }
    }

    /// Returns an iterator over every shape and reduction combination.
    ///
    /// # Examples
    ///
    /// ```
    /// use vis4earth_volume_smooth::SmoothSettings;
    ///
    /// assert_eq!(SmoothSettings::all_combinations().count(), 4);
    /// ```
    pub fn all_combinations() -> impl Iterator<Item = SmoothSettings> {
        SmoothDimension::all_values().iter().flat_map(|dimension| {
            SmoothKind::all_values()
                .iter()
                .map(move |kind| SmoothSettings::new(*dimension, *kind))
        })
    }
}

/// Error raised when parsing a [`SmoothDimension`] or [`SmoothKind`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid smoothing option '{value}', expected one of: {expected}")]
pub struct SmoothSettingParseError {
    value: String,
    expected: &'static str,
}

impl FromStr for SmoothDimension {
    type Err = SmoothSettingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xy" => Ok(SmoothDimension::Xy),
            "xyz" => Ok(SmoothDimension::Xyz),
            _ => Err(SmoothSettingParseError {
                value: s.to_string(),
                expected: "xy, xyz",
            }),
        }
    }
}

impl FromStr for SmoothKind {
    type Err = SmoothSettingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" => Ok(SmoothKind::Max),
            "average" | "avg" => Ok(SmoothKind::Average),
            _ => Err(SmoothSettingParseError {
                value: s.to_string(),
                expected: "max, average",
            }),
        }
    }
}

impl fmt::Display for SmoothDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SmoothDimension::Xy => "xy",
            SmoothDimension::Xyz => "xyz",
        })
    }
}

impl fmt::Display for SmoothKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SmoothKind::Max => "max",
            SmoothKind::Average => "average",
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[rstest]
    #[case("xy", SmoothDimension::Xy)]
    #[case("XYZ", SmoothDimension::Xyz)]
    fn parses_dimension(#[case] text: &str, #[case] expected: SmoothDimension) {
        assert_eq!(text.parse::<SmoothDimension>(), Ok(expected));
    }

    #[rstest]
    #[case("max", SmoothKind::Max)]
    #[case("Average", SmoothKind::Average)]
    #[case("avg", SmoothKind::Average)]
    fn parses_kind(#[case] text: &str, #[case] expected: SmoothKind) {
        assert_eq!(text.parse::<SmoothKind>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_options() {
        assert!("median".parse::<SmoothKind>().is_err());
        assert!("z".parse::<SmoothDimension>().is_err());
    }

    #[test]
    fn all_combinations_are_distinct() {
        let combinations: Vec<_> = SmoothSettings::all_combinations().collect();
        assert_eq!(combinations.len(), 4);
        for (i, a) in combinations.iter().enumerate() {
            for b in &combinations[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
