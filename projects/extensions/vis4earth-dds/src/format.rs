//! Mapping between API pixel formats and DXGI formats.

use ddsfile::DxgiFormat;
use vis4earth_transfer_function::f16;
use vis4earth_volume_api::PixelFormat;

/// The DXGI format a texture of `format` is stored with.
///
/// Integer voxels are written as normalized formats, which is how renderers sample them.
pub const fn dxgi_format(format: PixelFormat) -> DxgiFormat {
    match format {
        PixelFormat::G8 => DxgiFormat::R8_UNorm,
        PixelFormat::G16 => DxgiFormat::R16_UNorm,
        PixelFormat::R32Float => DxgiFormat::R32_Float,
        PixelFormat::Rgba16Float => DxgiFormat::R16G16B16A16_Float,
    }
}

/// Encodes half-float texels as little-endian bytes.
pub fn half_texels_to_bytes(texels: &[f16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(texels.len() * 2);
    for &texel in texels {
        bytes.extend_from_slice(&texel.to_bits().to_le_bytes());
    }
    bytes
}
