//! Convert command implementation
//!
//! Converts one or more images into a single WAV file for spectrogram
//! display.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use img2wav_core::params::DEFAULT_HOLD_CONSTANT;
use img2wav_core::{wav, ConversionParams, PixelGrid, Sequencer};

/// Run the convert command
///
/// # Arguments
/// * `images` - Image paths to process, in output order
/// * `output` - Output WAV path
/// * `delay` - Inter-image silence in milliseconds
/// * `frequency` - Center frequency in Hz
/// * `bandwidth` - Bandwidth in Hz
/// * `samplerate` - Output sample rate in Hz
pub fn run(
    images: &[String],
    output: &str,
    delay: u32,
    frequency: f64,
    bandwidth: f64,
    samplerate: u32,
) -> Result<ExitCode> {
    let start = Instant::now();

    let params = ConversionParams {
        sample_rate: samplerate,
        center_freq: frequency,
        bandwidth,
        delay_ms: delay,
        hold_constant: DEFAULT_HOLD_CONSTANT,
    };

    println!("{} {}", "Writing wav file:".cyan().bold(), output);
    println!("  {} {} Hz", "Center frequency:".dimmed(), frequency);
    println!("  {} {} Hz", "Bandwidth:".dimmed(), bandwidth);
    println!("  {} {} Hz", "Sample rate:".dimmed(), samplerate);
    println!("  {} {} ms", "Delay:".dimmed(), delay);

    let mut sequencer = Sequencer::new(params).context("invalid conversion parameters")?;

    for image in images {
        let image_start = Instant::now();
        println!("{} {}", "Processing:".cyan().bold(), image);

        let grid = PixelGrid::from_path(Path::new(image))
            .with_context(|| format!("failed to load image: {}", image))?;
        sequencer
            .push(&grid)
            .with_context(|| format!("failed to convert image: {}", image))?;

        println!(
            "  {}",
            format!(
                "{}x{} in {:.2?}",
                grid.width(),
                grid.height(),
                image_start.elapsed()
            )
            .dimmed()
        );
    }

    let samples = sequencer
        .finish()
        .context("failed to normalize output signal")?;
    wav::write_wav_file(Path::new(output), samplerate, &samples)
        .with_context(|| format!("failed to write output: {}", output))?;

    println!(
        "{} {} samples ({:.1}s of audio) in {:.2?}",
        "Done:".green().bold(),
        samples.len(),
        samples.len() as f64 / samplerate as f64,
        start.elapsed()
    );

    Ok(ExitCode::SUCCESS)
}
