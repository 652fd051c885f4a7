//! Common test imports and utilities for the shared volume types
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::{AxisSpec, AxisSpecError, Dimension, DimensionError, Voxel, VoxelType, VoxelTypeError};

// Standard library imports commonly used in tests
pub use alloc::format;
pub use alloc::string::ToString;

// Re-export super for convenience in test modules
pub use super::*;
