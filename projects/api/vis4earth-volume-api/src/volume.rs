//! Volume loading and smoothing entry points.

use crate::descriptors::VolumeTextureDesc;
use crate::error::{VolumeDataError, VolumeDataResult};
use crate::traits::RenderResourceFactory;
use vis4earth_volume_common::{AxisSpec, Dimension, VoxelType};
use vis4earth_volume_smooth::{smooth, SmoothSettings};
use vis4earth_volume_transform::reorient;

/// A volume uploaded through a [`RenderResourceFactory`].
#[derive(Debug)]
pub struct LoadedVolume<V> {
    /// The created render resource.
    pub resource: V,
    /// Dimension of the resource, after any reorientation.
    pub dimension: Dimension,
    /// Voxel type of the resource.
    pub voxel_type: VoxelType,
    /// Owned copy of the uploaded voxel bytes, if requested.
    pub buffer: Option<Vec<u8>>,
}

/// Describes a raw volume already held in memory.
#[derive(Debug, Clone)]
pub struct LoadFromMemoryDesc<'a> {
    /// Name given to the created resource.
    pub name: String,
    /// Raw voxel bytes, x-fastest and little-endian.
    pub data: &'a [u8],
    /// Expected `[x, y, z]` extent; validated.
    pub dimension: [i64; 3],
    /// Voxel type of `data`.
    pub voxel_type: VoxelType,
    /// Axis specification; validated. Defaults to `[1, 2, 3]`.
    pub axis: [i32; 3],
    /// Return an owned copy of the reoriented bytes alongside the resource.
    pub keep_buffer: bool,
}

impl<'a> LoadFromMemoryDesc<'a> {
    /// Describes `data` with the identity axis specification and no kept buffer.
    pub fn new(
        name: impl Into<String>,
        data: &'a [u8],
        dimension: [i64; 3],
        voxel_type: VoxelType,
    ) -> Self {
        Self {
            name: name.into(),
            data,
            dimension,
            voxel_type,
            axis: AxisSpec::IDENTITY.as_array(),
            keep_buffer: false,
        }
    }

    /// Sets the axis specification.
    pub fn with_axis(mut self, axis: [i32; 3]) -> Self {
        self.axis = axis;
        self
    }

    /// Requests an owned copy of the reoriented bytes.
    pub fn keep_buffer(mut self, keep: bool) -> Self {
        self.keep_buffer = keep;
        self
    }
}

/// Validates, reorients and uploads a raw volume held in memory.
///
/// Checks run in order and the first failure is returned:
/// dimension, content size, axis specification.
///
/// # Errors
///
/// - [`VolumeDataError::InvalidDimension`] if a dimension component is not positive
/// - [`VolumeDataError::ContentSizeMismatch`] if `data` is not exactly one volume
/// - [`VolumeDataError::InvalidAxisSpec`] if the axis triple is not a signed permutation
/// - [`VolumeDataError::Resource`] if the factory fails
pub fn load_from_memory<F: RenderResourceFactory>(
    factory: &F,
    desc: &LoadFromMemoryDesc<'_>,
) -> VolumeDataResult<LoadedVolume<F::Volume>> {
    let dimension = Dimension::from_array(desc.dimension)?;
    check_content_size(&desc.name, desc.data.len(), dimension, desc.voxel_type)?;
    reorient_and_create(
        factory,
        &desc.name,
        desc.data,
        dimension,
        desc.voxel_type,
        desc.axis,
        desc.keep_buffer,
    )
}

/// Describes a smoothing pass over a volume already held in memory.
#[derive(Debug, Clone)]
pub struct SmoothFromFlatArrayDesc<'a> {
    /// Name given to the created resource.
    pub name: String,
    /// Voxel bytes, x-fastest and little-endian.
    pub data: &'a [u8],
    /// Extent of `data`.
    pub dimension: Dimension,
    /// Voxel type of `data`.
    pub voxel_type: VoxelType,
    /// Neighbourhood and reduction.
    pub settings: SmoothSettings,
    /// Return an owned copy of the smoothed bytes alongside the resource.
    pub keep_buffer: bool,
}

/// Smooths a volume and uploads the result. The input is left untouched.
///
/// # Errors
///
/// - [`VolumeDataError::Smooth`] if `data` is not exactly one volume
/// - [`VolumeDataError::Resource`] if the factory fails
pub fn smooth_from_flat_array<F: RenderResourceFactory>(
    factory: &F,
    desc: &SmoothFromFlatArrayDesc<'_>,
) -> VolumeDataResult<LoadedVolume<F::Volume>> {
    let smoothed = smooth(desc.data, desc.dimension, desc.voxel_type, desc.settings)?;
    let texture = VolumeTextureDesc::new(desc.name.as_str(), desc.dimension, desc.voxel_type);
    let resource = factory
        .create_volume(&texture, &smoothed)
        .map_err(VolumeDataError::resource)?;

    Ok(LoadedVolume {
        resource,
        dimension: desc.dimension,
        voxel_type: desc.voxel_type,
        buffer: desc.keep_buffer.then_some(smoothed),
    })
}

pub(crate) fn check_content_size(
    source_name: &str,
    actual: usize,
    dimension: Dimension,
    voxel_type: VoxelType,
) -> VolumeDataResult<()> {
    let expected = dimension.byte_len(voxel_type);
    if actual != expected {
        return Err(VolumeDataError::ContentSizeMismatch {
            source_name: source_name.to_string(),
            expected,
            actual,
            dimension,
            voxel_type,
        });
    }
    Ok(())
}

/// Shared tail of every loader: validate the axis, reorient and upload.
pub(crate) fn reorient_and_create<F: RenderResourceFactory>(
    factory: &F,
    name: &str,
    data: &[u8],
    dimension: Dimension,
    voxel_type: VoxelType,
    axis: [i32; 3],
    keep_buffer: bool,
) -> VolumeDataResult<LoadedVolume<F::Volume>> {
    let axis = AxisSpec::new(axis)?;
    let reoriented = reorient(data, dimension, voxel_type, axis)?;
    let dimension = reoriented.dimension;

    let texture = VolumeTextureDesc::new(name, dimension, voxel_type);
    let resource = factory
        .create_volume(&texture, &reoriented.data)
        .map_err(VolumeDataError::resource)?;
    log::debug!("Created {voxel_type} volume '{name}' with dimension {dimension}");

    Ok(LoadedVolume {
        resource,
        dimension,
        voxel_type,
        buffer: keep_buffer.then(|| reoriented.into_owned()),
    })
}
