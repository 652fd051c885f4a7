//! Error types for transfer function operations.

use crate::curve::Channel;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for transfer function operations
pub type TransferFunctionResult<T> = Result<T, TransferFunctionError>;

/// Errors raised while loading, saving or interpolating a transfer function.
#[derive(Debug, Error)]
pub enum TransferFunctionError {
    /// The file could not be read or written.
    #[error("Invalid file path {}: {source}", .path.display())]
    InvalidFilePath {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A line of the text format could not be parsed.
    #[error("Invalid contents at line {line}: {reason}")]
    InvalidFileContents {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: LineError,
    },

    /// No colour curve was supplied to save.
    #[error("Invalid curve: no colour curve to save")]
    InvalidCurve,

    /// A colour ramp was requested from an empty control point set.
    #[error("Transfer function has no control points")]
    NoControlPoints,

    /// The pre-integration step is not a finite positive number.
    #[error("Invalid pre-integration step {0}: must be finite and positive")]
    InvalidStep(f32),
}

/// Reasons a single line of the text format is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    /// The line does not hold exactly `scalar r g b a`.
    #[error("expected 5 values (scalar r g b a), found {0}")]
    WrongFieldCount(usize),

    /// A field is not a finite number.
    #[error("'{0}' is not a finite number")]
    NotANumber(String),

    /// A colour channel lies outside `[0, 255.5)`.
    #[error("{channel} channel value {value} is outside [0, 255.5)")]
    ChannelOutOfRange {
        /// Offending channel.
        channel: Channel,
        /// Parsed value.
        value: f32,
    },
}
