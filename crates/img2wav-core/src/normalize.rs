//! Global normalization into the 16-bit sample range.
//!
//! The scale factor is derived from the peak magnitude of the WHOLE stream,
//! never per image, so relative brightness between images combined into one
//! file survives into the spectrogram.

use crate::error::{ConvertError, ConvertResult};

/// Largest magnitude representable symmetrically in 16-bit signed PCM.
pub const MAX_INT16_MAGNITUDE: f64 = i16::MAX as f64;

/// Rescales a raw sample stream to 16-bit signed integers.
///
/// The maximum-magnitude input sample maps exactly to ±32767; every other
/// sample keeps its sign and relative amplitude.
///
/// # Errors
/// [`ConvertError::DegenerateSignal`] if every sample is exactly zero.
pub fn normalize(samples: &[f64]) -> ConvertResult<Vec<i16>> {
    let peak = samples.iter().fold(0.0f64, |max, s| max.max(s.abs()));
    if peak == 0.0 {
        return Err(ConvertError::DegenerateSignal);
    }

    let scalar = MAX_INT16_MAGNITUDE / peak;
    Ok(samples.iter().map(|&s| (scalar * s).round() as i16).collect())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_peak_saturates_exactly() {
        let out = normalize(&[0.5, -2.0, 1.0]).unwrap();
        assert_eq!(out, vec![8192, -32767, 16384]);
        assert_eq!(out.iter().map(|s| s.unsigned_abs()).max(), Some(32767));
    }

    #[test]
    fn test_negative_peak_saturates_exactly() {
        let out = normalize(&[-4.0, 2.0]).unwrap();
        assert_eq!(out, vec![-32767, 16384]);
    }

    #[test]
    fn test_signs_preserved() {
        let input = [0.25, -0.75, 1.5, -1.5];
        let out = normalize(&input).unwrap();
        for (i, o) in input.iter().zip(&out) {
            assert_eq!(i.signum() as i32, o.signum() as i32);
        }
    }

    #[test]
    fn test_zeros_stay_zero() {
        let out = normalize(&[0.0, 3.0, 0.0]).unwrap();
        assert_eq!(out[0], 0);
        assert_eq!(out[2], 0);
    }

    #[test]
    fn test_all_zero_stream_is_degenerate() {
        let err = normalize(&[0.0; 16]).unwrap_err();
        assert!(matches!(err, ConvertError::DegenerateSignal));
    }

    #[test]
    fn test_empty_stream_is_degenerate() {
        assert!(matches!(
            normalize(&[]),
            Err(ConvertError::DegenerateSignal)
        ));
    }
}
