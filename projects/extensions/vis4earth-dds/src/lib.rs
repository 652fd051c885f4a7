//! Writes volume render resources to DDS files.
//!
//! [`DdsResourceFactory`] plugs into the loaders of `vis4earth-volume-api` and turns every
//! created resource into a `.dds` file that engines and texture viewers can open directly.
//!
//! # Example
//!
//! ```no_run
//! use vis4earth_dds::DdsResourceFactory;
//! use vis4earth_volume_api::{load_from_memory, LoadFromMemoryDesc};
//! use vis4earth_volume_common::VoxelType;
//!
//! let factory = DdsResourceFactory::new("out");
//! let data = vec![0u8; 64];
//! let desc = LoadFromMemoryDesc::new("density", &data, [4, 4, 4], VoxelType::UInt8);
//! let volume = load_from_memory(&factory, &desc).unwrap();
//! println!("{}", volume.resource.path.display());
//! ```

pub mod error;
pub mod factory;
pub mod format;

#[cfg(test)]
pub mod test_prelude;

pub use error::{DdsResourceError, DdsResourceResult};
pub use factory::{DdsColorTexture, DdsResourceFactory, DdsVolume};
pub use format::{dxgi_format, half_texels_to_bytes};
