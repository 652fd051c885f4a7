//! Error types for volume data operations.

use thiserror::Error;
use vis4earth_transfer_function::TransferFunctionError;
use vis4earth_volume_common::{AxisSpecError, Dimension, DimensionError, VoxelType, VoxelTypeError};
use vis4earth_volume_smooth::SmoothError;
use vis4earth_volume_transform::ReorientError;

#[cfg(feature = "file-io")]
use crate::file_io::FileIoError;
#[cfg(feature = "file-io")]
use std::path::PathBuf;

/// Result type for volume data operations
pub type VolumeDataResult<T> = Result<T, VolumeDataError>;

/// Errors that can occur while loading, smoothing or building render resources.
///
/// The first failing check short-circuits; no partial resource is returned.
#[derive(Debug, Error)]
pub enum VolumeDataError {
    /// A dimension component is not positive.
    #[error(transparent)]
    InvalidDimension(#[from] DimensionError),

    /// The volume file could not be opened or mapped.
    #[cfg(feature = "file-io")]
    #[error("Invalid file path {}: {source}", .path.display())]
    InvalidFilePath {
        /// Path that failed.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: FileIoError,
    },

    /// A voxel type tag or name was not recognized.
    #[error(transparent)]
    InvalidVoxelType(#[from] VoxelTypeError),

    /// The raw data length does not match the expected dimension and voxel type.
    #[error("Invalid contents of {source_name}: expected {expected} bytes for a {voxel_type} volume of dimension {dimension}, got {actual} bytes")]
    ContentSizeMismatch {
        /// File path or resource name of the data.
        source_name: String,
        /// Bytes required.
        expected: usize,
        /// Bytes present.
        actual: usize,
        /// Requested dimension.
        dimension: Dimension,
        /// Requested voxel type.
        voxel_type: VoxelType,
    },

    /// The axis triple is not a signed permutation of `{1, 2, 3}`.
    #[error(transparent)]
    InvalidAxisSpec(#[from] AxisSpecError),

    /// Reorientation rejected its input.
    #[error(transparent)]
    Reorient(#[from] ReorientError),

    /// The smoother rejected its input, usually a buffer size mismatch.
    #[error(transparent)]
    Smooth(#[from] SmoothError),

    /// Loading, saving or interpolating the transfer function failed.
    #[error(transparent)]
    TransferFunction(#[from] TransferFunctionError),

    /// The render resource factory failed.
    #[error("Render resource creation failed: {0}")]
    Resource(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl VolumeDataError {
    /// Wraps a render resource factory error.
    pub fn resource<E: std::error::Error + Send + Sync + 'static>(error: E) -> Self {
        Self::Resource(Box::new(error))
    }
}
