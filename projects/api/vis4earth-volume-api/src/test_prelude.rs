//! Common test imports and utilities for volume API tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;
pub use std::path::Path;
pub use tempfile::{Builder, NamedTempFile};

// Types from the core crates
pub use vis4earth_transfer_function::{
    f16, Channel, PreIntegrationSettings, TransferFunctionError, RESOLUTION,
};
pub use vis4earth_volume_common::{Dimension, VoxelType};
pub use vis4earth_volume_smooth::{SmoothDimension, SmoothError, SmoothKind, SmoothSettings};

// Core functionality from this crate, re-exported from the crate root
pub use super::*;

/// Helper function to read file contents.
pub fn read_file_contents(path: &Path) -> std::io::Result<Vec<u8>> {
    std::fs::read(path)
}

/// Helper to create a temporary input file with test data.
pub fn create_input_file_with_data(data: &[u8]) -> NamedTempFile {
    let input_file = Builder::new()
        .prefix("test_file_")
        .tempfile()
        .expect("Failed to create temp file");
    std::fs::write(input_file.path(), data).expect("Failed to write input data");
    input_file
}

/// Helper to create a temporary output file.
pub fn create_output_file() -> NamedTempFile {
    NamedTempFile::new().expect("Failed to create temp file")
}
