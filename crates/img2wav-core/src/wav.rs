//! Deterministic WAV file writer.
//!
//! Writes mono 16-bit PCM WAV files with no timestamps or variable metadata,
//! so identical inputs and parameters produce byte-identical files. The
//! BLAKE3 hash of the PCM data is exposed for byte-identity checks.

use std::io::{self, Write};
use std::path::Path;

use crate::error::{ConvertError, ConvertResult};

/// WAV file format parameters.
#[derive(Debug, Clone, Copy)]
pub struct WavFormat {
    /// Number of channels (always 1 for this tool).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this tool).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono 16-bit format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Bytes per sample (per channel).
    fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Block align (bytes per sample frame).
    fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Byte rate (bytes per second).
    fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// Converts 16-bit samples to little-endian PCM bytes.
pub fn samples_to_pcm16(samples: &[i16]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&sample.to_le_bytes());
    }
    pcm
}

/// Writes a complete WAV file to a writer.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Writes normalized samples to a mono 16-bit WAV file on disk.
///
/// # Errors
/// [`ConvertError::OutputWrite`] if the file cannot be created or written.
pub fn write_wav_file(path: &Path, sample_rate: u32, samples: &[i16]) -> ConvertResult<()> {
    let format = WavFormat::mono(sample_rate);
    let pcm = samples_to_pcm16(samples);
    std::fs::write(path, write_wav_to_vec(&format, &pcm)).map_err(|source| {
        ConvertError::OutputWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// BLAKE3 hash of the PCM data (not the full WAV file).
pub fn pcm_hash(samples: &[i16]) -> String {
    blake3::hash(&samples_to_pcm16(samples)).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wav_format() {
        let mono = WavFormat::mono(11025);
        assert_eq!(mono.channels, 1);
        assert_eq!(mono.sample_rate, 11025);
        assert_eq!(mono.byte_rate(), 22050);
        assert_eq!(mono.block_align(), 2);
    }

    #[test]
    fn test_samples_to_pcm16() {
        let pcm = samples_to_pcm16(&[0, 32767, -32767, 256]);
        assert_eq!(pcm.len(), 8);
        assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 0);
        assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), 32767);
        assert_eq!(i16::from_le_bytes([pcm[4], pcm[5]]), -32767);
        assert_eq!(i16::from_le_bytes([pcm[6], pcm[7]]), 256);
    }

    #[test]
    fn test_wav_header_layout() {
        let format = WavFormat::mono(11025);
        let pcm = samples_to_pcm16(&[0; 100]);
        let wav = write_wav_to_vec(&format, &pcm);

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(&wav[36..40], b"data");

        let channels = u16::from_le_bytes([wav[22], wav[23]]);
        assert_eq!(channels, 1);
        let rate = u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]);
        assert_eq!(rate, 11025);
        let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
        assert_eq!(data_size, 200);
    }

    #[test]
    fn test_pcm_hash_determinism() {
        let samples = vec![12, -34, 5600, -7800, 0];
        let hash1 = pcm_hash(&samples);
        let hash2 = pcm_hash(&samples);
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64); // BLAKE3 produces 64 hex chars
        assert_ne!(hash1, pcm_hash(&[12, -34]));
    }

    #[test]
    fn test_write_wav_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");
        write_wav_file(&path, 11025, &[1, 2, 3]).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 44 + 6);
        assert_eq!(&bytes[0..4], b"RIFF");
    }

    #[test]
    fn test_write_wav_file_bad_path() {
        let err = write_wav_file(Path::new("/nonexistent/dir/out.wav"), 11025, &[0]).unwrap_err();
        assert!(matches!(err, ConvertError::OutputWrite { .. }));
    }
}
