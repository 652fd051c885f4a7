//! Typed access to little-endian voxel bytes.
//!
//! Kernels are written once against [`Voxel`] and monomorphized for each
//! [`VoxelType`]; callers dispatch on the runtime tag.

use crate::voxel_type::VoxelType;
use core::mem::size_of;

/// A scalar that can be stored in a raw volume.
pub trait Voxel: Copy + PartialOrd + Send + Sync + 'static {
    /// Runtime tag for this type.
    const TYPE: VoxelType;

    /// Size in bytes.
    const SIZE: usize;

    /// Smallest representable value. Seed for running maxima.
    const LOWEST: Self;

    /// Accumulator used when averaging, wide enough to never overflow for a 3x3x3 window.
    type Sum: Copy;

    /// The empty accumulator.
    const ZERO_SUM: Self::Sum;

    /// Reads a voxel from the first [`Self::SIZE`] bytes of `bytes`.
    ///
    /// # Panics
    ///
    /// If `bytes` is shorter than [`Self::SIZE`].
    fn read_le(bytes: &[u8]) -> Self;

    /// Writes the voxel into the first [`Self::SIZE`] bytes of `out`.
    ///
    /// # Panics
    ///
    /// If `out` is shorter than [`Self::SIZE`].
    fn write_le(self, out: &mut [u8]);

    /// Adds `value` to `sum`.
    fn accumulate(sum: Self::Sum, value: Self) -> Self::Sum;

    /// Mean of `count` accumulated values, rounded to nearest for integer types.
    ///
    /// `count` must be non-zero.
    fn mean(sum: Self::Sum, count: u32) -> Self;
}

macro_rules! impl_integer_voxel {
    ($ty:ty, $tag:expr) => {
        impl Voxel for $ty {
            const TYPE: VoxelType = $tag;
            const SIZE: usize = size_of::<$ty>();
            const LOWEST: Self = <$ty>::MIN;
            type Sum = u64;
            const ZERO_SUM: u64 = 0;

            #[inline(always)]
            fn read_le(bytes: &[u8]) -> Self {
                let mut raw = [0u8; size_of::<$ty>()];
                raw.copy_from_slice(&bytes[..Self::SIZE]);
                <$ty>::from_le_bytes(raw)
            }

            #[inline(always)]
            fn write_le(self, out: &mut [u8]) {
                out[..Self::SIZE].copy_from_slice(&self.to_le_bytes());
            }

            #[inline(always)]
            fn accumulate(sum: u64, value: Self) -> u64 {
                sum + value as u64
            }

            #[inline(always)]
            fn mean(sum: u64, count: u32) -> Self {
                // round(sum / count) for non-negative sums, ties away from zero
                let count = count as u64;
                ((sum * 2 + count) / (count * 2)) as $ty
            }
        }
    };
}

impl_integer_voxel!(u8, VoxelType::UInt8);
impl_integer_voxel!(u16, VoxelType::UInt16);

impl Voxel for f32 {
    const TYPE: VoxelType = VoxelType::Float32;
    const SIZE: usize = size_of::<f32>();
    const LOWEST: Self = f32::NEG_INFINITY;
    type Sum = f64;
    const ZERO_SUM: f64 = 0.0;

    #[inline(always)]
    fn read_le(bytes: &[u8]) -> Self {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&bytes[..Self::SIZE]);
        f32::from_le_bytes(raw)
    }

    #[inline(always)]
    fn write_le(self, out: &mut [u8]) {
        out[..Self::SIZE].copy_from_slice(&self.to_le_bytes());
    }

    #[inline(always)]
    fn accumulate(sum: f64, value: Self) -> f64 {
        sum + value as f64
    }

    #[inline(always)]
    fn mean(sum: f64, count: u32) -> Self {
        (sum / count as f64) as f32
    }
}
