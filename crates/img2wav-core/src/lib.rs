//! img2wav conversion pipeline.
//!
//! Converts grayscale images into an audio waveform that reconstructs the
//! image when viewed through a spectrogram: columns map to frequencies,
//! rows map to time.
//!
//! # Overview
//!
//! The pipeline has three stages, applied per image and then concatenated:
//!
//! - **Row extraction** — decode an image into a row-major grid of 8-bit
//!   grayscale intensities.
//! - **Synthesis** — render each row as a block of samples by summing one
//!   cosine carrier per column, weighted by the squared pixel intensity.
//! - **Normalization** — rescale the complete stream (all images plus the
//!   silence gaps between them) so the global peak lands exactly on ±32767.
//!
//! Normalization is global on purpose: scaling per image would erase the
//! relative brightness of images combined into one file.
//!
//! # Determinism
//!
//! The pipeline is single-threaded and has no random or time-dependent
//! state; identical inputs and parameters produce byte-identical WAV files.
//! [`wav::pcm_hash`] exposes a BLAKE3 hash of the PCM data for checking.
//!
//! # Example
//!
//! ```ignore
//! use img2wav_core::{convert_images, ConversionParams, wav};
//!
//! let params = ConversionParams::default();
//! let samples = convert_images(&["photo.png"], &params)?;
//! wav::write_wav_file(Path::new("img.wav"), params.sample_rate, &samples)?;
//! ```

pub mod combine;
pub mod error;
pub mod grid;
pub mod normalize;
pub mod params;
pub mod sequence;
pub mod synth;
pub mod tone;
pub mod wav;

// Re-export main types at crate root
pub use error::{ConvertError, ConvertResult};
pub use grid::PixelGrid;
pub use params::ConversionParams;
pub use sequence::{convert_images, Sequencer};
