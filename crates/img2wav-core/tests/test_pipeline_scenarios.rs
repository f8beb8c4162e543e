//! End-to-end pipeline tests over synthetic images.

use std::f64::consts::PI;

use pretty_assertions::assert_eq;

use img2wav_core::synth::{frames_per_row, synthesize};
use img2wav_core::wav::pcm_hash;
use img2wav_core::{convert_images, ConversionParams, ConvertError, PixelGrid, Sequencer};

fn uniform_grid(width: usize, height: usize, intensity: u8) -> PixelGrid {
    PixelGrid::from_raw(width, height, vec![intensity; width * height]).unwrap()
}

#[test]
fn test_all_black_image_is_degenerate() {
    // A 2x2 all-zero image synthesizes to a correctly sized all-zero block,
    // and normalizing that block alone is undefined.
    let params = ConversionParams::default();
    let grid = uniform_grid(2, 2, 0);

    let block = synthesize(&grid, &params).unwrap();
    let fpr = frames_per_row(2, params.sample_rate, params.hold_constant);
    assert_eq!(block.len(), 2 * fpr);
    assert!(block.iter().all(|&s| s == 0.0));

    let mut seq = Sequencer::new(params).unwrap();
    seq.push(&grid).unwrap();
    assert!(matches!(seq.finish(), Err(ConvertError::DegenerateSignal)));
}

#[test]
fn test_single_bright_pixel_is_a_750hz_cosine() {
    // 1x1 at intensity 255 under default parameters: one carrier at
    // 2750 - 4000/2 = 750 Hz, amplitude 255^2.
    let params = ConversionParams::default();
    let grid = uniform_grid(1, 1, 255);

    let block = synthesize(&grid, &params).unwrap();
    let fpr = frames_per_row(1, params.sample_rate, params.hold_constant);
    assert_eq!(block.len(), fpr);

    let omega = 2.0 * PI * 750.0 / 11025.0;
    for (n, &s) in block.iter().enumerate().take(256) {
        let expected = 255.0 * 255.0 * (omega * n as f64).cos();
        assert!((s - expected).abs() < 1e-8);
    }

    // The peak sits at n = 0 where every cosine is 1, so after normalization
    // the first sample is exactly the format maximum.
    let mut seq = Sequencer::new(params).unwrap();
    seq.push(&grid).unwrap();
    let out = seq.finish().unwrap();
    assert_eq!(out[0], 32767);
    assert_eq!(out.iter().map(|s| s.unsigned_abs()).max(), Some(32767));
}

#[test]
fn test_gap_between_images_is_exact_silence() {
    // Two equal images at delay=1000ms: total length is two blocks plus one
    // sample rate worth of zeros, and the gap stays zero after normalization.
    let params = ConversionParams {
        delay_ms: 1000,
        ..Default::default()
    };
    let grid = uniform_grid(4, 2, 200);

    let mut seq = Sequencer::new(params).unwrap();
    seq.push(&grid).unwrap();
    seq.push(&grid).unwrap();

    let fpr = frames_per_row(4, params.sample_rate, params.hold_constant);
    let block_len = 2 * fpr;
    assert_eq!(seq.len(), 2 * block_len + 11025);

    let out = seq.finish().unwrap();
    assert!(out[block_len..block_len + 11025].iter().all(|&s| s == 0));
}

#[test]
fn test_global_normalization_preserves_relative_brightness() {
    // One image uniformly twice as bright as the other. With squared
    // intensity weighting the brighter block has 4x the amplitude; global
    // normalization keeps that ratio instead of scaling each image to full
    // range on its own.
    let params = ConversionParams {
        delay_ms: 1000,
        ..Default::default()
    };
    let dim = uniform_grid(4, 2, 100);
    let bright = uniform_grid(4, 2, 200);

    let mut seq = Sequencer::new(params).unwrap();
    seq.push(&dim).unwrap();
    seq.push(&bright).unwrap();
    let out = seq.finish().unwrap();

    let fpr = frames_per_row(4, params.sample_rate, params.hold_constant);
    let block_len = 2 * fpr;
    let dim_block = &out[..block_len];
    let bright_block = &out[block_len + 11025..];

    let dim_peak = dim_block.iter().map(|s| s.unsigned_abs()).max().unwrap();
    let bright_peak = bright_block.iter().map(|s| s.unsigned_abs()).max().unwrap();

    assert_eq!(bright_peak, 32767);
    // round(32767 / 4) — both blocks peak at their first sample, where every
    // carrier is at phase zero.
    assert_eq!(dim_peak, 8192);
    assert_eq!(dim_block[0], 8192);
    assert_eq!(bright_block[0], 32767);
}

#[test]
fn test_conversion_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.png");
    let img = image::GrayImage::from_fn(8, 4, |x, y| image::Luma([(x * 30 + y * 7) as u8]));
    img.save(&path).unwrap();

    let params = ConversionParams::default();
    let first = convert_images(&[&path], &params).unwrap();
    let second = convert_images(&[&path], &params).unwrap();

    assert_eq!(pcm_hash(&first), pcm_hash(&second));
}

#[test]
fn test_output_length_for_multiple_images() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.png");
    let b = dir.path().join("b.png");
    image::GrayImage::from_pixel(4, 2, image::Luma([90])).save(&a).unwrap();
    image::GrayImage::from_pixel(4, 3, image::Luma([180])).save(&b).unwrap();

    let params = ConversionParams::default();
    let out = convert_images(&[&a, &b], &params).unwrap();

    let fpr = frames_per_row(4, params.sample_rate, params.hold_constant);
    assert_eq!(out.len(), 2 * fpr + params.frames_per_delay() + 3 * fpr);
}
