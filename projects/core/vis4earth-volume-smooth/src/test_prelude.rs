//! Common test imports and utilities for smoothing tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::{smooth, smooth_into, SmoothDimension, SmoothError, SmoothKind, SmoothSettings};
pub use crate::SmoothDimension::{Xy, Xyz};
pub use crate::SmoothKind::{Average, Max};
pub use vis4earth_volume_common::{Dimension, VoxelType};

// Standard library imports commonly used in tests
pub use alloc::vec;
pub use alloc::vec::Vec;

// Re-export super for convenience in test modules
pub use super::*;

/// Shorthand for [`SmoothSettings::new`].
pub(crate) fn settings(dimension: SmoothDimension, kind: SmoothKind) -> SmoothSettings {
    SmoothSettings::new(dimension, kind)
}

pub(crate) fn u16_bytes(values: &[u16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub(crate) fn read_u16(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect()
}

pub(crate) fn f32_bytes(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub(crate) fn read_f32(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}
