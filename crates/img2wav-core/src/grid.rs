//! Image loading and row extraction.
//!
//! The pipeline works on a [`PixelGrid`]: a row-major grid of 8-bit grayscale
//! intensities. Any image the `image` crate can decode is accepted; color
//! inputs are reduced to luma before extraction.

use std::path::Path;

use image::ImageError;

use crate::error::{ConvertError, ConvertResult};

/// A decoded grayscale image: `height` rows of `width` intensities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Decodes an image file into a grayscale pixel grid.
    ///
    /// # Errors
    /// * [`ConvertError::ImageDecode`] if the file is unreadable or corrupt.
    /// * [`ConvertError::UnsupportedFormat`] if the format cannot be decoded
    ///   to grayscale intensities.
    pub fn from_path(path: &Path) -> ConvertResult<Self> {
        let img = image::open(path).map_err(|e| match e {
            ImageError::Unsupported(err) => ConvertError::UnsupportedFormat {
                path: path.to_path_buf(),
                message: err.to_string(),
            },
            other => ConvertError::ImageDecode {
                path: path.to_path_buf(),
                source: other,
            },
        })?;

        let luma = img.to_luma8();
        let (width, height) = luma.dimensions();
        Ok(Self {
            width: width as usize,
            height: height as usize,
            data: luma.into_raw(),
        })
    }

    /// Builds a grid from raw row-major intensity data.
    ///
    /// # Errors
    /// [`ConvertError::InvalidParameter`] if `data.len() != width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> ConvertResult<Self> {
        if data.len() != width * height {
            return Err(ConvertError::invalid_param(
                "data",
                format!(
                    "expected {} intensities for a {}x{} grid, got {}",
                    width * height,
                    width,
                    height,
                    data.len()
                ),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels (columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels (rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width)
    }

    /// Intensity at (row, col).
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    pub fn intensity(&self, row: usize, col: usize) -> u8 {
        assert!(row < self.height && col < self.width);
        self.data[row * self.width + col]
    }
}
