//! Descriptions of the render resources produced by this crate.

use derive_enum_all_values::AllValues;
use vis4earth_transfer_function::RESOLUTION;
use vis4earth_volume_common::{Dimension, VoxelType};

/// Texel format of a render resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum PixelFormat {
    /// Single 8-bit unsigned normalized channel.
    G8,
    /// Single 16-bit unsigned normalized channel.
    G16,
    /// Single 32-bit float channel.
    R32Float,
    /// Four 16-bit float channels.
    Rgba16Float,
}

impl PixelFormat {
    /// The format a volume of `voxel_type` is uploaded as.
    pub const fn for_voxel_type(voxel_type: VoxelType) -> Self {
        match voxel_type {
            VoxelType::UInt8 => PixelFormat::G8,
            VoxelType::UInt16 => PixelFormat::G16,
            VoxelType::Float32 => PixelFormat::R32Float,
        }
    }

    /// Size of a single texel in bytes.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::G8 => 1,
            PixelFormat::G16 => 2,
            PixelFormat::R32Float => 4,
            PixelFormat::Rgba16Float => 8,
        }
    }
}

/// Sampling filter of a render resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum TextureFilter {
    /// Point sampling.
    Nearest,
    /// Linear within a 2D texture.
    Bilinear,
    /// Linear across all three axes.
    Trilinear,
}

/// Addressing mode outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum TextureAddress {
    /// Repeat the edge texel.
    Clamp,
    /// Tile.
    Wrap,
    /// Tile, mirroring every other repetition.
    Mirror,
}

/// A 3D texture holding a volume.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VolumeTextureDesc {
    /// Resource name, used by backends that persist resources.
    pub name: String,
    /// Extent in texels.
    pub dimension: Dimension,
    /// Texel format.
    pub format: PixelFormat,
    /// Sampling filter.
    pub filter: TextureFilter,
    /// Addressing mode on all axes.
    pub address: TextureAddress,
    /// Number of mip levels.
    pub mip_levels: u32,
}

impl VolumeTextureDesc {
    /// A trilinear, clamped, single-mip volume texture for `voxel_type` voxels.
    pub fn new(name: impl Into<String>, dimension: Dimension, voxel_type: VoxelType) -> Self {
        Self {
            name: name.into(),
            dimension,
            format: PixelFormat::for_voxel_type(voxel_type),
            filter: TextureFilter::Trilinear,
            address: TextureAddress::Clamp,
            mip_levels: 1,
        }
    }

    /// Bytes of texel data for the top mip level.
    pub fn byte_len(&self) -> usize {
        self.dimension.voxel_count() * self.format.bytes_per_pixel()
    }
}

/// A 2D RGBA16F texture holding a colour ramp or a pre-integrated table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorTextureDesc {
    /// Resource name, used by backends that persist resources.
    pub name: String,
    /// Width in texels.
    pub width: usize,
    /// Height in texels.
    pub height: usize,
    /// Texel format.
    pub format: PixelFormat,
    /// Sampling filter.
    pub filter: TextureFilter,
    /// Addressing mode on both axes.
    pub address: TextureAddress,
}

impl ColorTextureDesc {
    /// A `RESOLUTION x 1` bilinear, clamped colour ramp.
    pub fn color_ramp(name: impl Into<String>) -> Self {
        Self::rgba16f(name, RESOLUTION, 1)
    }

    /// A `RESOLUTION x RESOLUTION` bilinear, clamped pre-integrated table.
    pub fn pre_integrated(name: impl Into<String>) -> Self {
        Self::rgba16f(name, RESOLUTION, RESOLUTION)
    }

    fn rgba16f(name: impl Into<String>, width: usize, height: usize) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            format: PixelFormat::Rgba16Float,
            filter: TextureFilter::Bilinear,
            address: TextureAddress::Clamp,
        }
    }

    /// Number of `f16` values of texel data.
    pub fn channel_count(&self) -> usize {
        self.width * self.height * 4
    }
}
