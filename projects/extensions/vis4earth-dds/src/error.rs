//! Errors raised while writing DDS render resources.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for DDS resource operations
pub type DdsResourceResult<T> = Result<T, DdsResourceError>;

/// Errors raised by [`DdsResourceFactory`](crate::DdsResourceFactory).
#[derive(Debug, Error)]
pub enum DdsResourceError {
    /// The output file could not be created.
    #[error("Failed to create {}: {source}", .path.display())]
    Io {
        /// Output path.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// The DDS header could not be built or written.
    #[error(transparent)]
    Dds(#[from] ddsfile::Error),

    /// The texel data does not match the size in the descriptor.
    #[error("Resource '{name}' expects {expected} elements of texel data, got {actual}")]
    DataSizeMismatch {
        /// Resource name.
        name: String,
        /// Elements required by the descriptor.
        expected: usize,
        /// Elements supplied.
        actual: usize,
    },

    /// An extent does not fit the 32-bit fields of a DDS header.
    #[error("Resource '{name}' with extent {extent:?} exceeds the DDS size limit")]
    DimensionTooLarge {
        /// Resource name.
        name: String,
        /// Requested `[width, height, depth]`.
        extent: [usize; 3],
    },
}
