use crate::kernel::smooth_volume;
use crate::settings::SmoothSettings;
use alloc::vec;
use alloc::vec::Vec;
use thiserror::Error;
use vis4earth_volume_common::{Dimension, VoxelType};

/// Validation errors for smoothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SmoothError {
    /// The input buffer does not hold exactly one volume of the given dimension and type.
    #[error("Input buffer is {actual} bytes, expected {expected} bytes for a {voxel_type} volume of dimension {dimension}")]
    SizeMismatch {
        /// Bytes required by the dimension and voxel type.
        expected: usize,
        /// Bytes provided.
        actual: usize,
        /// Dimension of the input volume.
        dimension: Dimension,
        /// Voxel type of the input volume.
        voxel_type: VoxelType,
    },

    /// The output buffer cannot hold the smoothed volume.
    #[error("Output buffer too small: needed {needed} bytes, got {actual} bytes")]
    OutputBufferTooSmall {
        /// Bytes required.
        needed: usize,
        /// Bytes provided.
        actual: usize,
    },
}

/// Smooths a flat volume into a newly allocated buffer.
///
/// Each output voxel is the Max or Average of its clipped 3x3 (XY) or 3x3x3 (XYZ)
/// neighbourhood, itself included. The input is validated before any work is done.
/// For `Float32`, a NaN anywhere in the neighbourhood makes the result NaN under
/// both reductions.
///
/// # Parameters
///
/// - `input`: The flat x-fastest voxel bytes, little-endian
/// - `dimension`: Extent of `input`
/// - `voxel_type`: Element type of `input`
/// - `settings`: Neighbourhood shape and reduction
///
/// # Errors
///
/// [`SmoothError::SizeMismatch`] if `input.len() != dimension.byte_len(voxel_type)`.
///
/// # Examples
///
/// ```
/// use vis4earth_volume_common::{Dimension, VoxelType};
/// use vis4earth_volume_smooth::{smooth, SmoothDimension, SmoothKind, SmoothSettings};
///
/// let dimension = Dimension::new(3, 1, 1).unwrap();
/// let settings = SmoothSettings::new(SmoothDimension::Xy, SmoothKind::Max);
/// let output = smooth(&[0, 9, 0], dimension, VoxelType::UInt8, settings).unwrap();
/// assert_eq!(output, [9, 9, 9]);
/// ```
pub fn smooth(
    input: &[u8],
    dimension: Dimension,
    voxel_type: VoxelType,
    settings: SmoothSettings,
) -> Result<Vec<u8>, SmoothError> {
    validate_input(input, dimension, voxel_type)?;

    let mut output = vec![0u8; input.len()];
    smooth_unchecked(input, &mut output, dimension, voxel_type, settings);
    Ok(output)
}

/// Smooths a flat volume into a caller-provided buffer.
///
/// # Parameters
///
/// - `input`: The flat x-fastest voxel bytes, little-endian
/// - `output`: Destination buffer; only the first `input.len()` bytes are written
/// - `dimension`: Extent of `input`
/// - `voxel_type`: Element type of `input`
/// - `settings`: Neighbourhood shape and reduction
///
/// # Errors
///
/// - [`SmoothError::SizeMismatch`] if `input.len() != dimension.byte_len(voxel_type)`
/// - [`SmoothError::OutputBufferTooSmall`] if `output` is shorter than `input`
pub fn smooth_into(
    input: &[u8],
    output: &mut [u8],
    dimension: Dimension,
    voxel_type: VoxelType,
    settings: SmoothSettings,
) -> Result<(), SmoothError> {
    validate_input(input, dimension, voxel_type)?;
    if output.len() < input.len() {
        return Err(SmoothError::OutputBufferTooSmall {
            needed: input.len(),
            actual: output.len(),
        });
    }

    smooth_unchecked(
        input,
        &mut output[..input.len()],
        dimension,
        voxel_type,
        settings,
    );
    Ok(())
}

fn validate_input(
    input: &[u8],
    dimension: Dimension,
    voxel_type: VoxelType,
) -> Result<(), SmoothError> {
    let expected = dimension.byte_len(voxel_type);
    if input.len() != expected {
        return Err(SmoothError::SizeMismatch {
            expected,
            actual: input.len(),
            dimension,
            voxel_type,
        });
    }
    Ok(())
}

fn smooth_unchecked(
    input: &[u8],
    output: &mut [u8],
    dimension: Dimension,
    voxel_type: VoxelType,
    settings: SmoothSettings,
) {
    log::debug!(
        "Smoothing {voxel_type} volume {dimension} ({} over {})",
        settings.kind,
        settings.dimension
    );
    match voxel_type {
        VoxelType::UInt8 => smooth_volume::<u8>(input, output, dimension, settings),
        VoxelType::UInt16 => smooth_volume::<u16>(input, output, dimension, settings),
        VoxelType::Float32 => smooth_volume::<f32>(input, output, dimension, settings),
    }
}
