//! Cosine-bank synthesis of image rows.
//!
//! Each image column gets one cosine carrier at a distinct frequency; the
//! carriers span `[center - bandwidth/2, center + bandwidth/2]` linearly from
//! the leftmost to the rightmost column. A row is rendered by holding every
//! carrier for `frames_per_row` samples, weighted by the squared pixel
//! intensity, so an STFT display of the output shows energy at `freq[c]`
//! proportional to `intensity(r, c)^2` for the duration of the row. Squaring
//! boosts contrast between bright and dark pixels at the cost of dynamic
//! range.

use std::f64::consts::PI;

use crate::error::{ConvertError, ConvertResult};
use crate::grid::PixelGrid;
use crate::params::ConversionParams;

/// Carrier frequency in Hz for each column.
///
/// Linear spacing inclusive of both band edges: column 0 sits at
/// `center - bandwidth/2` and column `width - 1` at `center + bandwidth/2`.
/// A single-column image gets one carrier at the lower band edge.
pub fn carrier_frequencies(width: usize, center_freq: f64, bandwidth: f64) -> Vec<f64> {
    let base = center_freq - bandwidth / 2.0;
    if width <= 1 {
        return vec![base; width];
    }
    (0..width)
        .map(|c| base + bandwidth * c as f64 / (width - 1) as f64)
        .collect()
}

/// Number of samples each row is held for.
///
/// The hold time in milliseconds is `hold_constant / width` (integer
/// division), so narrower images are held longer and total duration stays
/// comparable across widths.
pub fn frames_per_row(width: usize, sample_rate: u32, hold_constant: u32) -> usize {
    let hold_ms = hold_constant as u64 / width as u64;
    (sample_rate as u64 * hold_ms / 1000) as usize
}

/// Renders one image into an unnormalized sample block.
///
/// The block has exactly `height * frames_per_row` samples; sample `n` is
/// the sum over all columns of `intensity^2 * cos(omega[c] * n)`.
///
/// # Errors
/// * [`ConvertError::EmptyImage`] if the grid has zero width or height.
/// * [`ConvertError::InvalidParameter`] if the parameters are invalid or the
///   image is too wide for the hold constant to yield any frames per row.
pub fn synthesize(grid: &PixelGrid, params: &ConversionParams) -> ConvertResult<Vec<f64>> {
    params.validate()?;

    let (width, height) = (grid.width(), grid.height());
    if width == 0 || height == 0 {
        return Err(ConvertError::EmptyImage { width, height });
    }

    let fpr = frames_per_row(width, params.sample_rate, params.hold_constant);
    if fpr == 0 {
        return Err(ConvertError::invalid_param(
            "hold_constant",
            format!(
                "hold of {}ms per row yields no samples at {} Hz for a {} pixel wide image",
                params.hold_constant as u64 / width as u64,
                params.sample_rate,
                width
            ),
        ));
    }

    let rate = params.sample_rate as f64;
    let omegas: Vec<f64> = carrier_frequencies(width, params.center_freq, params.bandwidth)
        .into_iter()
        .map(|freq| 2.0 * PI * freq / rate)
        .collect();

    let mut samples = Vec::with_capacity(height * fpr);
    for (r, row) in grid.rows().enumerate() {
        let weights: Vec<f64> = row.iter().map(|&p| p as f64 * p as f64).collect();
        let start = r * fpr;
        for t in 0..fpr {
            let n = (start + t) as f64;
            let sum: f64 = weights
                .iter()
                .zip(&omegas)
                .map(|(w, omega)| w * (omega * n).cos())
                .sum();
            samples.push(sum);
        }
    }

    Ok(samples)
}
