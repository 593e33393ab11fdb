//! Error types for tally-viz operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tally-viz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for framebuffer or chart.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Length mismatch between tick positions and tick lengths.
    #[error("Data length mismatch: {positions} positions for {lengths} lengths")]
    DataLengthMismatch {
        /// Number of positions.
        positions: usize,
        /// Number of lengths.
        lengths: usize,
    },

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// Input rejected before any work was done.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Scale domain error (e.g., log of non-positive value).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Output path with an extension no encoder handles.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Configuration parsing error with line number.
    #[error("Configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),
}

impl Error {
    /// The error returned when normalizing a sequence with no values.
    pub(crate) fn empty_sequence() -> Self {
        Self::InvalidInput("cannot normalize an empty sequence".to_string())
    }
}
