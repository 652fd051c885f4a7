//! Transfer functions for direct volume rendering.
//!
//! A transfer function maps voxel scalars to colour and opacity. It is authored as a small
//! set of [`ControlPoints`] (usually loaded from the plain text format in [`text_format`]),
//! edited as a four-channel [`ColorCurve`], and uploaded as a fixed-resolution [`ColorRamp`].
//! Renderers using large sampling steps can also upload a [`PreIntegratedTable`].
//!
//! # Example
//!
//! ```
//! use vis4earth_transfer_function::{parse_control_points, ColorCurve, ColorRamp};
//!
//! let points = parse_control_points("0 255 0 0 255\n255 0 0 255 255\n").unwrap();
//! let ramp = ColorRamp::from_points(&points).unwrap();
//! let curve = ColorCurve::from_points(&points);
//!
//! assert_eq!(ramp.texel(0), Some([1.0, 0.0, 0.0, 1.0]));
//! assert_eq!(curve.evaluate(255.0), [0.0, 0.0, 1.0, 1.0]);
//! ```

pub mod control_points;
pub mod curve;
pub mod error;
pub mod pre_integration;
pub mod ramp;
pub mod text_format;

#[cfg(test)]
pub mod test_prelude;

pub use control_points::{ControlPoint, ControlPoints};
pub use curve::{Channel, ColorCurve, CurveKey, LinearCurve};
pub use error::{LineError, TransferFunctionError, TransferFunctionResult};
pub use half::f16;
pub use pre_integration::{PreIntegratedTable, PreIntegrationSettings};
pub use ramp::{lerp_from_points_to_flat_array, ColorRamp, RESOLUTION};
pub use text_format::{
    format_control_points, load_from_file, parse_control_points, save_to_file, CHANNEL_LIMIT,
};
