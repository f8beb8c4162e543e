//! Signal command implementation
//!
//! Writes a single-frequency test tone, useful for checking a spectrogram
//! display before converting real images.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use img2wav_core::{tone, wav};

/// Run the signal command
///
/// # Arguments
/// * `output` - Output WAV path
/// * `frequency` - Tone frequency in Hz
/// * `amplitude` - Peak sample value (within the 16-bit range)
/// * `samplerate` - Output sample rate in Hz
/// * `duration` - Tone length in seconds
pub fn run(
    output: &str,
    frequency: f64,
    amplitude: f64,
    samplerate: u32,
    duration: f64,
) -> Result<ExitCode> {
    println!("{} {}", "Writing wav file:".cyan().bold(), output);
    println!("  {} {} Hz", "Frequency:".dimmed(), frequency);
    println!("  {} {}", "Amplitude:".dimmed(), amplitude);
    println!("  {} {} Hz", "Sample rate:".dimmed(), samplerate);
    println!("  {} {} s", "Duration:".dimmed(), duration);

    let samples =
        tone::test_tone(frequency, amplitude, samplerate, duration).context("invalid tone")?;
    wav::write_wav_file(Path::new(output), samplerate, &samples)
        .with_context(|| format!("failed to write output: {}", output))?;

    println!("{} {} samples", "Done:".green().bold(), samples.len());

    Ok(ExitCode::SUCCESS)
}
