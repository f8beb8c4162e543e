//! Combining existing WAV files into one stream.
//!
//! Inputs must already match the output layout (mono, 16-bit PCM, same
//! sample rate); no resampling or re-normalization happens here. Files are
//! concatenated in the given order with a silence gap between them.

use std::path::Path;

use crate::error::{ConvertError, ConvertResult};
use crate::params::ConversionParams;

/// Reads the samples of a mono 16-bit PCM WAV file.
///
/// # Errors
/// [`ConvertError::IncompatibleWav`] if the file cannot be read or its
/// layout differs from mono 16-bit integer PCM at `expected_rate` Hz.
pub fn read_wav_samples(path: &Path, expected_rate: u32) -> ConvertResult<Vec<i16>> {
    let mut reader = hound::WavReader::open(path)
        .map_err(|e| ConvertError::incompatible_wav(path, e.to_string()))?;

    let spec = reader.spec();
    if spec.channels != 1 {
        return Err(ConvertError::incompatible_wav(
            path,
            format!("expected mono, got {} channels", spec.channels),
        ));
    }
    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(ConvertError::incompatible_wav(
            path,
            format!(
                "expected 16-bit integer PCM, got {}-bit {:?}",
                spec.bits_per_sample, spec.sample_format
            ),
        ));
    }
    if spec.sample_rate != expected_rate {
        return Err(ConvertError::incompatible_wav(
            path,
            format!(
                "expected {} Hz sample rate, got {}",
                expected_rate, spec.sample_rate
            ),
        ));
    }

    reader
        .samples::<i16>()
        .collect::<Result<Vec<i16>, _>>()
        .map_err(|e| ConvertError::incompatible_wav(path, e.to_string()))
}

/// Concatenates WAV files with silence gaps between them.
///
/// A gap of `frames_per_delay` zero samples follows every file except the
/// last. Samples pass through untouched.
pub fn combine_wavs<P: AsRef<Path>>(
    paths: &[P],
    params: &ConversionParams,
) -> ConvertResult<Vec<i16>> {
    params.validate()?;

    let gap = params.frames_per_delay();
    let mut stream = Vec::new();
    for (i, path) in paths.iter().enumerate() {
        if i > 0 {
            stream.extend(std::iter::repeat(0i16).take(gap));
        }
        stream.extend(read_wav_samples(path.as_ref(), params.sample_rate)?);
    }
    Ok(stream)
}
