use crate::scatter::scatter_voxels;
use alloc::borrow::Cow;
use alloc::vec;
use alloc::vec::Vec;
use thiserror::Error;
use vis4earth_volume_common::{AxisSpec, Dimension, VoxelType};

/// Validation errors for reorientation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorientError {
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

    /// The output buffer cannot hold the reoriented volume.
    #[error("Output buffer too small: needed {needed} bytes, got {actual} bytes")]
    OutputBufferTooSmall {
        /// Bytes required.
        needed: usize,
        /// Bytes provided.
        actual: usize,
    },
}

/// A reoriented volume.
///
/// The identity reorientation borrows the input; every other reorientation owns a new buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reoriented<'a> {
    /// Dimension after reorientation.
    pub dimension: Dimension,
    /// Flat x-fastest voxel bytes.
    pub data: Cow<'a, [u8]>,
}

impl Reoriented<'_> {
    /// Returns the voxel bytes as an owned buffer, copying only if they are still borrowed.
    pub fn into_owned(self) -> Vec<u8> {
        self.data.into_owned()
    }
}

/// Reorients a flat volume according to `axis`.
///
/// # Parameters
///
/// - `input`: The flat x-fastest voxel bytes, little-endian
/// - `dimension`: Extent of `input`
/// - `voxel_type`: Element type of `input`
/// - `axis`: How source axes map onto destination axes
///
/// # Returns
///
/// The reoriented volume with its permuted dimension. When `axis` is the identity the
/// input is returned borrowed and unchanged.
///
/// # Errors
///
/// [`ReorientError::SizeMismatch`] if `input.len() != dimension.byte_len(voxel_type)`.
pub fn reorient(
    input: &[u8],
    dimension: Dimension,
    voxel_type: VoxelType,
    axis: AxisSpec,
) -> Result<Reoriented<'_>, ReorientError> {
    validate_input(input, dimension, voxel_type)?;

    if axis.is_identity() {
        return Ok(Reoriented {
            dimension,
            data: Cow::Borrowed(input),
        });
    }

    let mut output = vec![0u8; input.len()];
    let dimension = reorient_unchecked(input, &mut output, dimension, voxel_type, axis);
    Ok(Reoriented {
        dimension,
        data: Cow::Owned(output),
    })
}

/// Reorients a flat volume into a caller-provided buffer.
///
/// Always writes `output`, including for the identity reorientation.
///
/// # Parameters
///
/// - `input`: The flat x-fastest voxel bytes, little-endian
/// - `output`: Destination buffer; only the first `input.len()` bytes are written
/// - `dimension`: Extent of `input`
/// - `voxel_type`: Element type of `input`
/// - `axis`: How source axes map onto destination axes
///
/// # Returns
///
/// The dimension of the volume written to `output`.
///
/// # Errors
///
/// - [`ReorientError::SizeMismatch`] if `input.len() != dimension.byte_len(voxel_type)`
/// - [`ReorientError::OutputBufferTooSmall`] if `output` is shorter than `input`
pub fn reorient_into(
    input: &[u8],
    output: &mut [u8],
    dimension: Dimension,
    voxel_type: VoxelType,
    axis: AxisSpec,
) -> Result<Dimension, ReorientError> {
    validate_input(input, dimension, voxel_type)?;
    if output.len() < input.len() {
        return Err(ReorientError::OutputBufferTooSmall {
            needed: input.len(),
            actual: output.len(),
        });
    }

    let output = &mut output[..input.len()];
    if axis.is_identity() {
        output.copy_from_slice(input);
        return Ok(dimension);
    }

    Ok(reorient_unchecked(
        input, output, dimension, voxel_type, axis,
    ))
}

fn validate_input(
    input: &[u8],
    dimension: Dimension,
    voxel_type: VoxelType,
) -> Result<(), ReorientError> {
    let expected = dimension.byte_len(voxel_type);
    if input.len() != expected {
        return Err(ReorientError::SizeMismatch {
            expected,
            actual: input.len(),
            dimension,
            voxel_type,
        });
    }
    Ok(())
}

fn reorient_unchecked(
    input: &[u8],
    output: &mut [u8],
    dimension: Dimension,
    voxel_type: VoxelType,
    axis: AxisSpec,
) -> Dimension {
    log::debug!("Reorienting {voxel_type} volume {dimension} by ({axis})");
    match voxel_type {
        VoxelType::UInt8 => scatter_voxels::<1>(input, output, dimension, axis),
        VoxelType::UInt16 => scatter_voxels::<2>(input, output, dimension, axis),
        VoxelType::Float32 => scatter_voxels::<4>(input, output, dimension, axis),
    }
    dimension.permuted(axis)
}
