use crate::settings::{SmoothDimension, SmoothKind, SmoothSettings};
use core::ops::RangeInclusive;
use vis4earth_volume_common::{Dimension, Voxel};

/// Neighbour indices along one axis, clipped to the volume.
#[inline(always)]
fn neighbour_range(position: usize, extent: usize) -> RangeInclusive<usize> {
    position.saturating_sub(1)..=(position + 1).min(extent - 1)
}

/// Smooths every voxel of `input` into `output`.
///
/// Reads only from `input`, so every output voxel sees the unsmoothed neighbourhood.
///
/// # Requirements
///
/// `input.len()` and `output.len()` must both equal `dimension.voxel_count() * T::SIZE`.
pub(crate) fn smooth_volume<T: Voxel>(
    input: &[u8],
    output: &mut [u8],
    dimension: Dimension,
    settings: SmoothSettings,
) {
    debug_assert_eq!(input.len(), dimension.voxel_count() * T::SIZE);
    debug_assert_eq!(output.len(), input.len());

    let [nx, ny, nz] = dimension.as_array();
    let mut out_chunks = output.chunks_exact_mut(T::SIZE);

    for z in 0..nz {
        let zs = match settings.dimension {
            SmoothDimension::Xy => z..=z,
            SmoothDimension::Xyz => neighbour_range(z, nz),
        };
        for y in 0..ny {
            let ys = neighbour_range(y, ny);
            for x in 0..nx {
                let window = Window {
                    xs: neighbour_range(x, nx),
                    ys: ys.clone(),
                    zs: zs.clone(),
                };
                let value: T = match settings.kind {
                    SmoothKind::Max => window.max(input, dimension),
                    SmoothKind::Average => window.average(input, dimension),
                };

                if let Some(out) = out_chunks.next() {
                    value.write_le(out);
                }
            }
        }
    }
}

struct Window {
    xs: RangeInclusive<usize>,
    ys: RangeInclusive<usize>,
    zs: RangeInclusive<usize>,
}

impl Window {
    #[inline(always)]
    fn fold<T: Voxel, A>(
        &self,
        input: &[u8],
        dimension: Dimension,
        init: A,
        mut f: impl FnMut(A, T) -> A,
    ) -> A {
        let mut acc = init;
        for z in self.zs.clone() {
            for y in self.ys.clone() {
                let row = z * dimension.slice_len() + y * dimension.x();
                for x in self.xs.clone() {
                    acc = f(acc, T::read_le(&input[(row + x) * T::SIZE..]));
                }
            }
        }
        acc
    }

    /// Largest sample in the window. An unordered sample (NaN) wins and stays,
    /// so any NaN in the window yields NaN, same as [`Window::average`].
    #[inline(always)]
    fn max<T: Voxel>(&self, input: &[u8], dimension: Dimension) -> T {
        self.fold(input, dimension, T::LOWEST, |max, value: T| {
            if is_unordered(max) {
                max
            } else if is_unordered(value) || value > max {
                value
            } else {
                max
            }
        })
    }

    #[inline(always)]
    fn average<T: Voxel>(&self, input: &[u8], dimension: Dimension) -> T {
        let (sum, count) = self.fold(
            input,
            dimension,
            (T::ZERO_SUM, 0u32),
            |(sum, count), value: T| (T::accumulate(sum, value), count + 1),
        );
        T::mean(sum, count)
    }
}

/// `true` only for values that do not compare equal to themselves.
#[inline(always)]
fn is_unordered<T: PartialOrd>(value: T) -> bool {
    value.partial_cmp(&value).is_none()
}
