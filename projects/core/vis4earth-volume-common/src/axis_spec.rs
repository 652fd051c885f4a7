//! Signed axis permutations.
//!
//! An axis specification is a triple such as `(2, -1, 3)`. Entry `i` names the source
//! axis (1 = X, 2 = Y, 3 = Z) that becomes destination axis `i`; a negative sign reverses
//! the direction along that destination axis.

use core::fmt;
use thiserror::Error;

/// A validated signed permutation of `{1, 2, 3}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisSpec {
    axis: [i32; 3],
}

/// Error raised when an axis triple is not a signed permutation of `{1, 2, 3}`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AxisSpecError {
    /// The absolute values do not cover `{1, 2, 3}` exactly once.
    #[error("Invalid axis specification {axis:?}: absolute values must be a permutation of 1, 2, 3")]
    NotAPermutation {
        /// The rejected triple.
        axis: [i32; 3],
    },
}

impl AxisSpec {
    /// The identity reorientation `(1, 2, 3)`.
    pub const IDENTITY: AxisSpec = AxisSpec { axis: [1, 2, 3] };

    /// Validates and creates an axis specification.
    ///
    /// # Errors
    ///
    /// [`AxisSpecError::NotAPermutation`] unless `{|a0|, |a1|, |a2|} == {1, 2, 3}`.
    pub fn new(axis: [i32; 3]) -> Result<Self, AxisSpecError> {
        let mut seen = [false; 3];
        for value in axis {
            let index = value.unsigned_abs() as usize;
            if !(1..=3).contains(&index) || seen[index - 1] {
                return Err(AxisSpecError::NotAPermutation { axis });
            }
            seen[index - 1] = true;
        }

        Ok(Self { axis })
    }

    /// The raw signed triple.
    #[inline]
    pub const fn as_array(&self) -> [i32; 3] {
        self.axis
    }

    /// `true` for `(1, 2, 3)`, which leaves a volume untouched.
    #[inline]
    pub const fn is_identity(&self) -> bool {
        self.axis[0] == 1 && self.axis[1] == 2 && self.axis[2] == 3
    }

    /// Zero-based source axis feeding destination axis `dest_axis`.
    #[inline]
    pub const fn source_axis(&self, dest_axis: usize) -> usize {
        self.axis[dest_axis].unsigned_abs() as usize - 1
    }

    /// Whether destination axis `dest_axis` runs in reverse.
    #[inline]
    pub const fn is_flipped(&self, dest_axis: usize) -> bool {
        self.axis[dest_axis] < 0
    }

    /// The specification that undoes this one.
    ///
    /// Reorienting by `self` and then by `self.inverse()` yields the original volume.
    pub fn inverse(&self) -> Self {
        let mut inverse = [0i32; 3];
        for dest_axis in 0..3 {
            let sign = if self.is_flipped(dest_axis) { -1 } else { 1 };
            inverse[self.source_axis(dest_axis)] = sign * (dest_axis as i32 + 1);
        }
        Self { axis: inverse }
    }
}

impl Default for AxisSpec {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for AxisSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.axis[0], self.axis[1], self.axis[2])
    }
}
