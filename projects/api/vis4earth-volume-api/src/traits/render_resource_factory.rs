//! Core trait for render resource backends.

use crate::descriptors::{ColorTextureDesc, VolumeTextureDesc};
use vis4earth_transfer_function::f16;

/// Allocates render resources and copies texel data into them.
///
/// The loader, smoother and transfer function builder never talk to a renderer directly.
/// They describe the resource they need and hand the bytes to a factory, which may upload
/// them to a GPU, write them to disk, or keep them in memory.
///
/// Implementations must validate that the data length matches the descriptor.
pub trait RenderResourceFactory: Send + Sync {
    /// Handle to a created 3D texture.
    type Volume;

    /// Handle to a created 2D colour texture.
    type ColorTexture;

    /// Backend failure.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates a 3D texture and fills it with `data`.
    ///
    /// # Parameters
    ///
    /// - `desc`: Size, format and sampling of the texture
    /// - `data`: Flat x-fastest texels, `desc.byte_len()` bytes
    fn create_volume(
        &self,
        desc: &VolumeTextureDesc,
        data: &[u8],
    ) -> Result<Self::Volume, Self::Error>;

    /// Creates a 2D RGBA16F texture and fills it with `texels`.
    ///
    /// # Parameters
    ///
    /// - `desc`: Size and sampling of the texture
    /// - `texels`: Row-major `[r, g, b, a, ...]`, `desc.channel_count()` values
    fn create_color_texture(
        &self,
        desc: &ColorTextureDesc,
        texels: &[f16],
    ) -> Result<Self::ColorTexture, Self::Error>;

    /// Replaces the contents of an existing colour texture without reallocating it.
    ///
    /// # Parameters
    ///
    /// - `texture`: A texture previously returned by [`Self::create_color_texture`]
    /// - `texels`: New contents, same length as at creation
    fn update_color_texture(
        &self,
        texture: &mut Self::ColorTexture,
        texels: &[f16],
    ) -> Result<(), Self::Error>;
}
