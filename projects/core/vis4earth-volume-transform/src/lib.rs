//! Reorientation of flat raw volumes.
//!
//! A volume is reoriented by an [`AxisSpec`]: destination axis `i` takes the data of source
//! axis `|axis[i]| - 1`, reversed when `axis[i]` is negative. The result keeps the x-fastest
//! flat layout with the permuted [`Dimension`].
//!
//! # Example
//!
//! ```
//! use vis4earth_volume_common::{AxisSpec, Dimension, VoxelType};
//! use vis4earth_volume_transform::reorient;
//!
//! // 2x2x1 volume, swap X and Y.
//! let input = [b'a', b'b', b'c', b'd'];
//! let dimension = Dimension::new(2, 2, 1).unwrap();
//! let axis = AxisSpec::new([2, 1, 3]).unwrap();
//!
//! let reoriented = reorient(&input, dimension, VoxelType::UInt8, axis).unwrap();
//! assert_eq!(&*reoriented.data, b"acbd");
//! ```
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

/// Safe entry points validating buffers before scattering voxels
pub mod reorient;

mod scatter;

#[cfg(test)]
pub mod test_prelude;

pub use reorient::{reorient, reorient_into, ReorientError, Reoriented};
pub use vis4earth_volume_common::{AxisSpec, Dimension, VoxelType};
