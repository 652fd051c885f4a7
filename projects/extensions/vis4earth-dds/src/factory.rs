//! [`RenderResourceFactory`] implementation that writes one DDS file per resource.

use crate::error::{DdsResourceError, DdsResourceResult};
use crate::format::{dxgi_format, half_texels_to_bytes};
use ddsfile::{AlphaMode, D3D10ResourceDimension, Dds, NewDxgiParams};
use std::fs::File;
use std::path::{Path, PathBuf};
use vis4earth_transfer_function::f16;
use vis4earth_volume_api::{ColorTextureDesc, RenderResourceFactory, VolumeTextureDesc};

/// A volume texture written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DdsVolume {
    /// Location of the DDS file.
    pub path: PathBuf,
    /// Description the volume was created with.
    pub desc: VolumeTextureDesc,
}

/// A colour texture written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct DdsColorTexture {
    /// Location of the DDS file.
    pub path: PathBuf,
    /// Description the texture was created with.
    pub desc: ColorTextureDesc,
}

/// Writes every created resource to `<output_dir>/<name>.dds`.
///
/// Volumes become 3D textures and colour textures become 2D RGBA16F textures. Only the
/// base mip level is written. Sampling state has no DDS equivalent and is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DdsResourceFactory {
    output_dir: PathBuf,
}

impl DdsResourceFactory {
    /// Creates a factory writing into `output_dir`, which must already exist.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory the resources are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{name}.dds"))
    }

    fn write_color_texture(
        &self,
        path: &Path,
        desc: &ColorTextureDesc,
        texels: &[f16],
    ) -> DdsResourceResult<()> {
        check_len(&desc.name, desc.channel_count(), texels.len())?;
        let too_large = |_| DdsResourceError::DimensionTooLarge {
            name: desc.name.clone(),
            extent: [desc.width, desc.height, 1],
        };
        let params = NewDxgiParams {
            height: u32::try_from(desc.height).map_err(too_large)?,
            width: u32::try_from(desc.width).map_err(too_large)?,
            depth: None,
            format: dxgi_format(desc.format),
            mipmap_levels: Some(1),
            array_layers: Some(1),
            caps2: None,
            is_cubemap: false,
            resource_dimension: D3D10ResourceDimension::Texture2D,
            alpha_mode: AlphaMode::Unknown,
        };
        write_dds(path, params, half_texels_to_bytes(texels))
    }
}

impl RenderResourceFactory for DdsResourceFactory {
    type Volume = DdsVolume;
    type ColorTexture = DdsColorTexture;
    type Error = DdsResourceError;

    fn create_volume(
        &self,
        desc: &VolumeTextureDesc,
        data: &[u8],
    ) -> Result<Self::Volume, Self::Error> {
        check_len(&desc.name, desc.byte_len(), data.len())?;

        let [x, y, z] = desc.dimension.as_array();
        let to_u32 = |extent: usize| {
            u32::try_from(extent).map_err(|_| DdsResourceError::DimensionTooLarge {
                name: desc.name.clone(),
                extent: desc.dimension.as_array(),
            })
        };
        let params = NewDxgiParams {
            height: to_u32(y)?,
            width: to_u32(x)?,
            depth: Some(to_u32(z)?),
            format: dxgi_format(desc.format),
            mipmap_levels: Some(1),
            array_layers: None,
            caps2: None,
            is_cubemap: false,
            resource_dimension: D3D10ResourceDimension::Texture3D,
            alpha_mode: AlphaMode::Unknown,
        };

        let path = self.path_for(&desc.name);
        write_dds(&path, params, data.to_vec())?;
        log::info!("Wrote volume {} ({})", path.display(), desc.dimension);

        Ok(DdsVolume {
            path,
            desc: desc.clone(),
        })
    }

    fn create_color_texture(
        &self,
        desc: &ColorTextureDesc,
        texels: &[f16],
    ) -> Result<Self::ColorTexture, Self::Error> {
        let path = self.path_for(&desc.name);
        self.write_color_texture(&path, desc, texels)?;
        log::info!(
            "Wrote colour texture {} ({}x{})",
            path.display(),
            desc.width,
            desc.height
        );

        Ok(DdsColorTexture {
            path,
            desc: desc.clone(),
        })
    }

    fn update_color_texture(
        &self,
        texture: &mut Self::ColorTexture,
        texels: &[f16],
    ) -> Result<(), Self::Error> {
        self.write_color_texture(&texture.path, &texture.desc, texels)?;
        log::debug!("Rewrote colour texture {}", texture.path.display());
        Ok(())
    }
}

fn check_len(name: &str, expected: usize, actual: usize) -> DdsResourceResult<()> {
    if expected != actual {
        return Err(DdsResourceError::DataSizeMismatch {
            name: name.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

fn write_dds(path: &Path, params: NewDxgiParams, data: Vec<u8>) -> DdsResourceResult<()> {
    let mut dds = Dds::new_dxgi(params)?;
    dds.data = data;
    let mut file = File::create(path).map_err(|source| DdsResourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    dds.write(&mut file)?;
    Ok(())
}
