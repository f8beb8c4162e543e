//! Error types for the conversion pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur while converting images to audio.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The image file could not be opened or decoded.
    #[error("failed to decode image '{path}': {source}")]
    ImageDecode {
        /// Path of the offending image.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: image::ImageError,
    },

    /// The image format cannot be reduced to 8-bit grayscale intensities.
    #[error("unsupported image format '{path}': {message}")]
    UnsupportedFormat {
        /// Path of the offending image.
        path: PathBuf,
        /// Why the format was rejected.
        message: String,
    },

    /// The image has zero width or height.
    #[error("empty image: {width}x{height}")]
    EmptyImage {
        /// Decoded width in pixels.
        width: usize,
        /// Decoded height in pixels.
        height: usize,
    },

    /// Every synthesized sample is exactly zero, so the normalization
    /// scalar is undefined.
    #[error("signal contains only zero samples; normalization is undefined")]
    DegenerateSignal,

    /// The output file could not be written.
    #[error("failed to write output '{path}': {source}")]
    OutputWrite {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An input WAV file does not match the expected layout.
    #[error("incompatible wav file '{path}': {message}")]
    IncompatibleWav {
        /// Path of the offending WAV file.
        path: PathBuf,
        /// What did not match.
        message: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },
}

impl ConvertError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an incompatible WAV error.
    pub fn incompatible_wav(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::IncompatibleWav {
            path: path.into(),
            message: message.into(),
        }
    }
}
