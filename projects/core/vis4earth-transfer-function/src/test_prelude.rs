//! Common test imports and utilities for transfer function tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;
pub use tempfile::NamedTempFile;

// Core functionality from this crate, re-exported from the crate root
pub use super::*;

pub(crate) const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub(crate) const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
pub(crate) const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Builds a control point set from `(scalar, rgba)` pairs.
pub(crate) fn points(entries: &[(f32, [f32; 4])]) -> ControlPoints {
    entries.iter().copied().collect()
}
