//! Common test imports and utilities for DDS resource tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use ddsfile::{Dds, DxgiFormat};
pub use rstest::rstest;

// Types from the other workspace crates
pub use vis4earth_transfer_function::{f16, RESOLUTION};
pub use vis4earth_volume_api::{
    ColorTextureDesc, PixelFormat, RenderResourceFactory, VolumeTextureDesc,
};
pub use vis4earth_volume_common::{Dimension, VoxelType};

// Core functionality from this crate, re-exported from the crate root
pub use super::*;

/// Helper to read back a written DDS file.
pub fn read_dds(path: &std::path::Path) -> Dds {
    let mut file = std::fs::File::open(path).expect("Failed to open DDS file");
    Dds::read(&mut file).expect("Failed to parse DDS file")
}
