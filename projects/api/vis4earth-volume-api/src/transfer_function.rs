//! Transfer function render resources.

use crate::descriptors::ColorTextureDesc;
use crate::error::{VolumeDataError, VolumeDataResult};
use crate::traits::RenderResourceFactory;
use std::path::{Path, PathBuf};
use vis4earth_transfer_function::{
    load_from_file, save_to_file, ColorCurve, ColorRamp, PreIntegratedTable,
    PreIntegrationSettings,
};

/// A transfer function uploaded through a [`RenderResourceFactory`].
#[derive(Debug)]
pub struct LoadedTransferFunction<T> {
    /// The colour ramp render resource.
    pub color_ramp: T,
    /// CPU copy of the uploaded ramp.
    pub ramp: ColorRamp,
    /// Editable curve built from the same control points.
    pub curve: ColorCurve,
}

/// Describes a transfer function text file to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferFunctionDesc {
    /// Name given to the colour ramp resource. Defaults to the file stem.
    pub name: String,
    /// Path of the text file.
    pub path: PathBuf,
}

impl TransferFunctionDesc {
    /// Describes `path`, naming the resource after the file stem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "transfer_function".to_string());
        Self { name, path }
    }

    /// Sets the resource name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Loads a transfer function file into a colour ramp resource and a colour curve.
///
/// # Errors
///
/// - [`VolumeDataError::TransferFunction`] if the file cannot be read, a line is malformed,
///   or the file holds no control points
/// - [`VolumeDataError::Resource`] if the factory fails
pub fn load_transfer_function<F: RenderResourceFactory>(
    factory: &F,
    desc: &TransferFunctionDesc,
) -> VolumeDataResult<LoadedTransferFunction<F::ColorTexture>> {
    let points = load_from_file(&desc.path)?;
    let ramp = ColorRamp::from_points(&points)?;
    let curve = ColorCurve::from_points(&points);

    let color_ramp = factory
        .create_color_texture(&ColorTextureDesc::color_ramp(desc.name.as_str()), ramp.as_flat())
        .map_err(VolumeDataError::resource)?;

    Ok(LoadedTransferFunction {
        color_ramp,
        ramp,
        curve,
    })
}

/// Saves a colour curve as a transfer function text file.
///
/// # Errors
///
/// [`VolumeDataError::TransferFunction`] if `curve` is `None` or the file cannot be written.
pub fn save_transfer_function(curve: Option<&ColorCurve>, path: &Path) -> VolumeDataResult<()> {
    Ok(save_to_file(curve, path)?)
}

/// Re-interpolates `curve` and writes it into an existing colour ramp resource.
///
/// # Returns
///
/// The CPU copy of the new ramp.
///
/// # Errors
///
/// - [`VolumeDataError::TransferFunction`] if the curve has no keys
/// - [`VolumeDataError::Resource`] if the factory fails
pub fn update_color_ramp<F: RenderResourceFactory>(
    factory: &F,
    color_ramp: &mut F::ColorTexture,
    curve: &ColorCurve,
) -> VolumeDataResult<ColorRamp> {
    let ramp = ColorRamp::from_curve(curve)?;
    factory
        .update_color_texture(color_ramp, ramp.as_flat())
        .map_err(VolumeDataError::resource)?;
    Ok(ramp)
}

/// Builds and uploads a pre-integrated table for `ramp`.
///
/// # Errors
///
/// - [`VolumeDataError::TransferFunction`] if the step is not finite and positive
/// - [`VolumeDataError::Resource`] if the factory fails
pub fn create_pre_integrated_table<F: RenderResourceFactory>(
    factory: &F,
    name: &str,
    ramp: &ColorRamp,
    settings: PreIntegrationSettings,
) -> VolumeDataResult<F::ColorTexture> {
    let table = PreIntegratedTable::build(ramp, settings)?;
    factory
        .create_color_texture(&ColorTextureDesc::pre_integrated(name), table.as_flat())
        .map_err(VolumeDataError::resource)
}
