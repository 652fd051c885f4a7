//! A render resource factory that keeps resources as owned buffers.

use crate::descriptors::{ColorTextureDesc, VolumeTextureDesc};
use crate::traits::RenderResourceFactory;
use thiserror::Error;
use vis4earth_transfer_function::f16;

/// A volume texture held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryVolume {
    /// Description the volume was created with.
    pub desc: VolumeTextureDesc,
    /// Texel data.
    pub data: Vec<u8>,
}

/// A colour texture held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct InMemoryColorTexture {
    /// Description the texture was created with.
    pub desc: ColorTextureDesc,
    /// Row-major RGBA texels.
    pub texels: Vec<f16>,
}

/// Errors raised by [`InMemoryResourceFactory`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InMemoryResourceError {
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
}

/// Keeps every created resource as an owned copy of its data.
///
/// Useful for hosts that upload resources themselves and for tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InMemoryResourceFactory;

fn check_len(name: &str, expected: usize, actual: usize) -> Result<(), InMemoryResourceError> {
    if expected != actual {
        return Err(InMemoryResourceError::DataSizeMismatch {
            name: name.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

impl RenderResourceFactory for InMemoryResourceFactory {
    type Volume = InMemoryVolume;
    type ColorTexture = InMemoryColorTexture;
    type Error = InMemoryResourceError;

    fn create_volume(
        &self,
        desc: &VolumeTextureDesc,
        data: &[u8],
    ) -> Result<Self::Volume, Self::Error> {
        check_len(&desc.name, desc.byte_len(), data.len())?;
        Ok(InMemoryVolume {
            desc: desc.clone(),
            data: data.to_vec(),
        })
    }

    fn create_color_texture(
        &self,
        desc: &ColorTextureDesc,
        texels: &[f16],
    ) -> Result<Self::ColorTexture, Self::Error> {
        check_len(&desc.name, desc.channel_count(), texels.len())?;
        Ok(InMemoryColorTexture {
            desc: desc.clone(),
            texels: texels.to_vec(),
        })
    }

    fn update_color_texture(
        &self,
        texture: &mut Self::ColorTexture,
        texels: &[f16],
    ) -> Result<(), Self::Error> {
        check_len(&texture.desc.name, texture.texels.len(), texels.len())?;
        texture.texels.copy_from_slice(texels);
        Ok(())
    }
}
