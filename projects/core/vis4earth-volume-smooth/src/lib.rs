//! Neighbourhood smoothing of flat raw volumes.
//!
//! Every voxel is replaced by the Max or Average of its 3x3 (in-slice) or 3x3x3
//! neighbourhood. Neighbourhoods are clipped at the volume border rather than padded,
//! so border voxels reduce over fewer samples.
#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod kernel;
pub mod settings;
pub mod smooth;

#[cfg(test)]
pub mod test_prelude;

pub use settings::{SmoothDimension, SmoothKind, SmoothSettingParseError, SmoothSettings};
pub use smooth::{smooth, smooth_into, SmoothError};
