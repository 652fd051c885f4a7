//! Validated volume extents.

use crate::axis_spec::AxisSpec;
use crate::voxel_type::VoxelType;
use core::fmt;
use thiserror::Error;

/// Widest voxel the pipeline stores, used to bound [`Dimension::byte_len`].
const MAX_VOXEL_SIZE: usize = 4;

/// A strictly positive 3D volume extent in voxels.
///
/// Construction validates every component, so any `Dimension` in hand describes
/// a non-empty volume whose byte length fits into `usize` for every [`VoxelType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    extent: [usize; 3],
}

/// Errors raised when validating a [`Dimension`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// At least one component is zero or negative.
    #[error("Invalid dimension ({x}, {y}, {z}): every component must be positive")]
    NonPositive {
        /// Requested X extent.
        x: i64,
        /// Requested Y extent.
        y: i64,
        /// Requested Z extent.
        z: i64,
    },

    /// The voxel count (or its byte length) does not fit into the address space.
    #[error("Invalid dimension ({x}, {y}, {z}): volume is too large to address")]
    TooLarge {
        /// Requested X extent.
        x: i64,
        /// Requested Y extent.
        y: i64,
        /// Requested Z extent.
        z: i64,
    },
}

impl Dimension {
    /// Validates and creates a dimension.
    ///
    /// # Errors
    ///
    /// - [`DimensionError::NonPositive`] if any component is `<= 0`.
    /// - [`DimensionError::TooLarge`] if the volume cannot be addressed in memory.
    pub fn new(x: i64, y: i64, z: i64) -> Result<Self, DimensionError> {
        if x <= 0 || y <= 0 || z <= 0 {
            return Err(DimensionError::NonPositive { x, y, z });
        }

        let too_large = DimensionError::TooLarge { x, y, z };
        let extent = [
            usize::try_from(x).map_err(|_| too_large.clone())?,
            usize::try_from(y).map_err(|_| too_large.clone())?,
            usize::try_from(z).map_err(|_| too_large.clone())?,
        ];

        extent[0]
            .checked_mul(extent[1])
            .and_then(|xy| xy.checked_mul(extent[2]))
            .and_then(|count| count.checked_mul(MAX_VOXEL_SIZE))
            .ok_or(too_large)?;

        Ok(Self { extent })
    }

    /// Validates and creates a dimension from an `[x, y, z]` array.
    ///
    /// # Errors
    ///
    /// Same as [`Dimension::new`].
    pub fn from_array(extent: [i64; 3]) -> Result<Self, DimensionError> {
        Self::new(extent[0], extent[1], extent[2])
    }

    /// Extent along X.
    #[inline]
    pub const fn x(&self) -> usize {
        self.extent[0]
    }

    /// Extent along Y.
    #[inline]
    pub const fn y(&self) -> usize {
        self.extent[1]
    }

    /// Extent along Z.
    #[inline]
    pub const fn z(&self) -> usize {
        self.extent[2]
    }

    /// Extent along `axis` (0 = X, 1 = Y, 2 = Z).
    ///
    /// # Panics
    ///
    /// If `axis > 2`.
    #[inline]
    pub const fn get(&self, axis: usize) -> usize {
        self.extent[axis]
    }

    /// The extent as `[x, y, z]`.
    #[inline]
    pub const fn as_array(&self) -> [usize; 3] {
        self.extent
    }

    /// Number of voxels in one Z slice.
    #[inline]
    pub const fn slice_len(&self) -> usize {
        self.extent[0] * self.extent[1]
    }

    /// Total number of voxels.
    #[inline]
    pub const fn voxel_count(&self) -> usize {
        self.extent[0] * self.extent[1] * self.extent[2]
    }

    /// Number of bytes a flat buffer of this dimension occupies.
    #[inline]
    pub const fn byte_len(&self, voxel_type: VoxelType) -> usize {
        self.voxel_count() * voxel_type.size()
    }

    /// The dimension a volume has after being reoriented by `axis`.
    ///
    /// Destination axis `i` takes the extent of source axis `|axis[i]| - 1`.
    pub fn permuted(&self, axis: AxisSpec) -> Self {
        Self {
            extent: [
                self.extent[axis.source_axis(0)],
                self.extent[axis.source_axis(1)],
                self.extent[axis.source_axis(2)],
            ],
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x(), self.y(), self.z())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[rstest]
    #[case(1, 1, 1)]
    #[case(256, 256, 64)]
    #[case(7, 3, 1)]
    fn accepts_positive_extents(#[case] x: i64, #[case] y: i64, #[case] z: i64) {
        let dimension = Dimension::new(x, y, z).unwrap();
        assert_eq!(dimension.as_array(), [x as usize, y as usize, z as usize]);
        assert_eq!(dimension.voxel_count(), (x * y * z) as usize);
    }

    #[rstest]
    #[case(0, 1, 1)]
    #[case(1, 0, 1)]
    #[case(1, 1, 0)]
    #[case(-4, 2, 2)]
    #[case(2, 2, -1)]
    fn rejects_non_positive_extents(#[case] x: i64, #[case] y: i64, #[case] z: i64) {
        assert_eq!(
            Dimension::new(x, y, z),
            Err(DimensionError::NonPositive { x, y, z })
        );
    }

    #[test]
    fn rejects_unaddressable_volume() {
        let err = Dimension::new(i64::MAX, i64::MAX, 2).unwrap_err();
        assert!(matches!(err, DimensionError::TooLarge { .. }));
    }

    #[rstest]
    #[case(VoxelType::UInt8, 24)]
    #[case(VoxelType::UInt16, 48)]
    #[case(VoxelType::Float32, 96)]
    fn byte_len_scales_with_voxel_size(#[case] voxel_type: VoxelType, #[case] expected: usize) {
        let dimension = Dimension::new(2, 3, 4).unwrap();
        assert_eq!(dimension.byte_len(voxel_type), expected);
    }

    #[rstest]
    #[case([1, 2, 3], [2, 3, 4])]
    #[case([2, 1, 3], [3, 2, 4])]
    #[case([-3, 1, 2], [4, 2, 3])]
    #[case([3, -2, -1], [4, 3, 2])]
    fn permuted_follows_source_axes(#[case] axis: [i32; 3], #[case] expected: [usize; 3]) {
        let dimension = Dimension::new(2, 3, 4).unwrap();
        let axis = AxisSpec::new(axis).unwrap();
        assert_eq!(dimension.permuted(axis).as_array(), expected);
    }

    #[test]
    fn displays_as_extent_triplet() {
        let dimension = Dimension::new(2, 3, 4).unwrap();
        assert_eq!(format!("{dimension}"), "2x3x4");
    }
}
