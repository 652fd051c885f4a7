//! High-level API for preparing volumetric data for rendering.
//!
//! This crate ties the core crates together behind a pluggable [`RenderResourceFactory`]:
//! raw volumes are validated, reoriented and uploaded, optionally smoothed, and transfer
//! function files are turned into colour ramp textures.
//!
//! # Features
//!
//! - Loading headerless raw volumes from memory or from memory-mapped files
//! - Signed axis permutation on load
//! - Max and average neighbourhood smoothing
//! - Transfer function loading, editing, saving and pre-integration
//!
//! # Example
//!
//! ```
//! use vis4earth_volume_api::{load_from_memory, InMemoryResourceFactory, LoadFromMemoryDesc};
//! use vis4earth_volume_common::VoxelType;
//!
//! let data = [1u8, 2, 3, 4];
//! let desc = LoadFromMemoryDesc::new("ct", &data, [2, 2, 1], VoxelType::UInt8)
//!     .with_axis([2, 1, 3]);
//! let loaded = load_from_memory(&InMemoryResourceFactory, &desc).unwrap();
//!
//! assert_eq!(loaded.dimension.as_array(), [2, 2, 1]);
//! assert_eq!(loaded.resource.data, [1, 3, 2, 4]);
//! ```

pub mod descriptors;
pub mod error;
pub mod resources;
pub mod traits;
pub mod transfer_function;
pub mod volume;

#[cfg(feature = "file-io")]
pub mod file_io;

#[cfg(test)]
pub mod test_prelude;

// Re-export key types
pub use descriptors::{
    ColorTextureDesc, PixelFormat, TextureAddress, TextureFilter, VolumeTextureDesc,
};
pub use error::{VolumeDataError, VolumeDataResult};
pub use resources::{
    InMemoryColorTexture, InMemoryResourceError, InMemoryResourceFactory, InMemoryVolume,
};
pub use traits::RenderResourceFactory;

// Re-export convenience functions
pub use transfer_function::{
    create_pre_integrated_table, load_transfer_function, save_transfer_function,
    update_color_ramp, LoadedTransferFunction, TransferFunctionDesc,
};
pub use volume::{
    load_from_memory, smooth_from_flat_array, LoadFromMemoryDesc, LoadedVolume,
    SmoothFromFlatArrayDesc,
};

// Re-export file operation types when file-io feature is enabled
#[cfg(feature = "file-io")]
pub use file_io::{load_from_file, write_raw_volume, FileIoError, LoadFromFileDesc};
