//! Conversion parameters.
//!
//! All tunables for a conversion run live in [`ConversionParams`]; nothing in
//! the pipeline reads ambient globals. The defaults match the classic tool:
//! 11025 Hz sample rate, a 4000 Hz band centered on 2750 Hz, and a 2 second
//! gap between images.

use crate::error::{ConvertError, ConvertResult};

/// Default output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 11025;

/// Default center frequency of the encoded band in Hz.
pub const DEFAULT_CENTER_FREQ: f64 = 2750.0;

/// Default bandwidth of the encoded band in Hz.
pub const DEFAULT_BANDWIDTH: f64 = 4000.0;

/// Default silence inserted between images in milliseconds.
pub const DEFAULT_DELAY_MS: u32 = 2000;

/// Default row-hold constant.
///
/// Each row is held for `hold_constant / width` milliseconds, so narrower
/// images get a proportionally longer hold and images of different widths
/// come out with comparable durations. Raising it stretches the resulting
/// spectrogram vertically.
pub const DEFAULT_HOLD_CONSTANT: u32 = 10240;

/// Immutable configuration for one conversion run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionParams {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Center frequency of the encoded band in Hz.
    pub center_freq: f64,
    /// Bandwidth of the encoded band in Hz.
    pub bandwidth: f64,
    /// Silence between images in milliseconds.
    pub delay_ms: u32,
    /// Row-hold constant in milliseconds-per-unit-width.
    pub hold_constant: u32,
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            center_freq: DEFAULT_CENTER_FREQ,
            bandwidth: DEFAULT_BANDWIDTH,
            delay_ms: DEFAULT_DELAY_MS,
            hold_constant: DEFAULT_HOLD_CONSTANT,
        }
    }
}

impl ConversionParams {
    /// Validates the parameter set.
    pub fn validate(&self) -> ConvertResult<()> {
        if self.sample_rate == 0 {
            return Err(ConvertError::invalid_param(
                "sample_rate",
                "must be at least 1 Hz",
            ));
        }
        if !self.center_freq.is_finite() {
            return Err(ConvertError::invalid_param(
                "center_freq",
                "must be finite",
            ));
        }
        if !self.bandwidth.is_finite() || self.bandwidth < 0.0 {
            return Err(ConvertError::invalid_param(
                "bandwidth",
                "must be finite and non-negative",
            ));
        }
        if self.hold_constant == 0 {
            return Err(ConvertError::invalid_param(
                "hold_constant",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Number of zero samples inserted between images.
    pub fn frames_per_delay(&self) -> usize {
        (self.sample_rate as u64 * self.delay_ms as u64 / 1000) as usize
    }
}
