//! Common building blocks for the vis4earth volume pipeline.
//!
//! This crate holds the small value types every other crate in the workspace agrees on:
//!
//! - [`VoxelType`]: the element type of a raw volume file.
//! - [`Dimension`]: a validated, strictly positive 3D extent.
//! - [`AxisSpec`]: a signed axis permutation used to reorient volumes.
//! - [`Voxel`]: typed access to little-endian voxel bytes.
//!
//! Voxel data is always stored as a flat, x-fastest byte buffer:
//! the voxel at `(x, y, z)` lives at index `z * (X * Y) + y * X + x`.
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod axis_spec;
pub mod dimension;
pub mod voxel;
pub mod voxel_type;

#[cfg(test)]
pub mod test_prelude;

pub use axis_spec::{AxisSpec, AxisSpecError};
pub use dimension::{Dimension, DimensionError};
pub use voxel::Voxel;
pub use voxel_type::{VoxelType, VoxelTypeError};
