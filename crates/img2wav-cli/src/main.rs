//! img2wav - convert images to a wav file to display in a spectrogram.
//!
//! If multiple images are specified, they are combined into a single wav
//! file with a silence gap between them.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use img2wav_cli::commands;

/// img2wav - encode images into spectrogram-visible audio
#[derive(Parser)]
#[command(name = "img2wav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert images to a wav file to display in a spectrogram
    Convert {
        /// Image files to process, in output order
        #[arg(required = true)]
        images: Vec<String>,

        /// Output file to write the wav to
        #[arg(short, long, default_value = "img.wav")]
        output: String,

        /// Delay in ms between images when more than one is specified
        #[arg(short, long, default_value_t = 2000)]
        delay: u32,

        /// Center frequency for the audio output signal in Hz
        #[arg(short, long, default_value_t = 2750.0)]
        frequency: f64,

        /// Bandwidth for the audio output signal in Hz
        #[arg(short, long, default_value_t = 4000.0)]
        bandwidth: f64,

        /// Sample rate for the audio output signal in Hz
        #[arg(short, long, default_value_t = 11025)]
        samplerate: u32,
    },

    /// Combine a directory of wav files into a single wav file
    Combine {
        /// Directory of wav files to combine
        input: String,

        /// Output file to write the wav to
        #[arg(short, long, default_value = "combined.wav")]
        output: String,

        /// Delay in ms between wav file output
        #[arg(short, long, default_value_t = 2000)]
        delay: u32,

        /// Sample rate every input file must match, in Hz
        #[arg(short, long, default_value_t = 11025)]
        samplerate: u32,
    },

    /// Write a single-frequency test tone for checking a spectrogram setup
    Signal {
        /// Output file to write the wav to
        #[arg(short, long, default_value = "signal.wav")]
        output: String,

        /// Tone frequency in Hz
        #[arg(short, long, default_value_t = 5000.0)]
        frequency: f64,

        /// Peak sample value
        #[arg(short, long, default_value_t = 5000.0)]
        amplitude: f64,

        /// Sample rate for the audio output signal in Hz
        #[arg(short, long, default_value_t = 44100)]
        samplerate: u32,

        /// Tone length in seconds
        #[arg(short = 't', long, default_value_t = 5.0)]
        duration: f64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            images,
            output,
            delay,
            frequency,
            bandwidth,
            samplerate,
        } => commands::convert::run(&images, &output, delay, frequency, bandwidth, samplerate),
        Commands::Combine {
            input,
            output,
            delay,
            samplerate,
        } => commands::combine::run(&input, &output, delay, samplerate),
        Commands::Signal {
            output,
            frequency,
            amplitude,
            samplerate,
            duration,
        } => commands::signal::run(&output, frequency, amplitude, samplerate, duration),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
