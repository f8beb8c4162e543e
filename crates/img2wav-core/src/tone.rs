//! Single-frequency test tone.
//!
//! A debugging aid for checking a spectrogram setup before converting real
//! images: a pure sine at a known frequency should draw one horizontal line.

use std::f64::consts::PI;

use crate::error::{ConvertError, ConvertResult};

/// Generates `duration_secs` of a sine wave at `frequency` Hz.
///
/// The amplitude is applied directly as a 16-bit sample value; no
/// normalization is involved.
///
/// # Errors
/// [`ConvertError::InvalidParameter`] on a zero sample rate, a non-finite or
/// negative frequency/duration, or an amplitude outside the 16-bit range.
pub fn test_tone(
    frequency: f64,
    amplitude: f64,
    sample_rate: u32,
    duration_secs: f64,
) -> ConvertResult<Vec<i16>> {
    if sample_rate == 0 {
        return Err(ConvertError::invalid_param(
            "sample_rate",
            "must be at least 1 Hz",
        ));
    }
    if !frequency.is_finite() || frequency < 0.0 {
        return Err(ConvertError::invalid_param(
            "frequency",
            "must be finite and non-negative",
        ));
    }
    if !duration_secs.is_finite() || duration_secs < 0.0 {
        return Err(ConvertError::invalid_param(
            "duration",
            "must be finite and non-negative",
        ));
    }
    if !amplitude.is_finite() || amplitude.abs() > i16::MAX as f64 {
        return Err(ConvertError::invalid_param(
            "amplitude",
            format!("must be within ±{}", i16::MAX),
        ));
    }

    let rate = sample_rate as f64;
    let total = (rate * duration_secs) as usize;
    Ok((0..total)
        .map(|n| (amplitude * (2.0 * PI * frequency * n as f64 / rate).sin()).round() as i16)
        .collect())
}
