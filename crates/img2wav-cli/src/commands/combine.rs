//! Combine command implementation
//!
//! Concatenates a directory of compatible WAV files into one file with
//! silence gaps between them.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use img2wav_core::{combine, wav, ConversionParams};

/// Run the combine command
///
/// # Arguments
/// * `input_dir` - Directory to scan for `*.wav` files
/// * `output` - Output WAV path
/// * `delay` - Silence between files in milliseconds
/// * `samplerate` - Expected sample rate of every input, in Hz
pub fn run(input_dir: &str, output: &str, delay: u32, samplerate: u32) -> Result<ExitCode> {
    let params = ConversionParams {
        sample_rate: samplerate,
        delay_ms: delay,
        ..Default::default()
    };

    let pattern = Path::new(input_dir).join("*.wav");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("input directory is not valid UTF-8: {}", input_dir))?;

    // Sorted for a deterministic output order; the output file itself is
    // skipped in case it already lives in the input directory.
    let output_path = Path::new(output);
    let mut paths: Vec<PathBuf> = glob::glob(pattern)
        .context("invalid glob pattern")?
        .filter_map(std::result::Result::ok)
        .filter(|p| p.as_path() != output_path)
        .collect();
    paths.sort();

    if paths.is_empty() {
        bail!("no wav files found in: {}", input_dir);
    }

    println!("{} {}", "Writing wav file:".cyan().bold(), output);
    for path in &paths {
        println!("{} {}", "Combining:".cyan().bold(), path.display());
    }

    let samples = combine::combine_wavs(&paths, &params).context("failed to combine wav files")?;
    wav::write_wav_file(output_path, samplerate, &samples)
        .with_context(|| format!("failed to write output: {}", output))?;

    println!(
        "{} {} files, {} samples",
        "Done:".green().bold(),
        paths.len(),
        samples.len()
    );

    Ok(ExitCode::SUCCESS)
}
