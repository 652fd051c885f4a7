//! Common test imports and utilities for reorientation tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::{reorient, reorient_into, ReorientError};
pub use vis4earth_volume_common::{AxisSpec, Dimension, VoxelType};

// Standard library imports commonly used in tests
pub use alloc::borrow::Cow;
pub use alloc::vec;
pub use alloc::vec::Vec;

// Re-export super for convenience in test modules
pub use super::*;

/// Builds an axis specification, panicking on invalid input.
pub(crate) fn axis_spec(axis: [i32; 3]) -> AxisSpec {
    AxisSpec::new(axis).expect("valid axis specification")
}

/// Generates `len` bytes where every byte differs from its neighbours.
pub(crate) fn sequential_volume(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}
