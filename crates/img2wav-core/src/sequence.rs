//! Batch sequencing: images in, one normalized sample stream out.
//!
//! The sequencer is a strictly linear pipeline. Per image: extract rows,
//! synthesize a block, append it to the accumulating stream, with a silence
//! gap before every image after the first. Normalization runs exactly once,
//! over the complete stream, after the last image — the scale factor depends
//! on the global peak, so no output is final until every block is in.

use std::path::Path;

use crate::error::ConvertResult;
use crate::grid::PixelGrid;
use crate::normalize::normalize;
use crate::params::ConversionParams;
use crate::synth::synthesize;

/// Accumulates per-image sample blocks into one stream.
///
/// Push grids in output order, then call [`finish`](Sequencer::finish) to
/// normalize. Any push failure aborts the batch; the stream is never
/// partially finalized.
#[derive(Debug)]
pub struct Sequencer {
    params: ConversionParams,
    stream: Vec<f64>,
    images: usize,
}

impl Sequencer {
    /// Creates a sequencer for the given parameters.
    ///
    /// # Errors
    /// [`crate::ConvertError::InvalidParameter`] on an invalid parameter set.
    pub fn new(params: ConversionParams) -> ConvertResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            stream: Vec::new(),
            images: 0,
        })
    }

    /// Synthesizes one image and appends its block to the stream.
    ///
    /// A gap of `frames_per_delay` zero samples is inserted before every
    /// image except the first.
    pub fn push(&mut self, grid: &PixelGrid) -> ConvertResult<()> {
        let block = synthesize(grid, &self.params)?;
        if self.images > 0 {
            self.stream
                .extend(std::iter::repeat(0.0).take(self.params.frames_per_delay()));
        }
        self.stream.extend(block);
        self.images += 1;
        Ok(())
    }

    /// Number of images pushed so far.
    pub fn images(&self) -> usize {
        self.images
    }

    /// Number of raw samples accumulated so far.
    pub fn len(&self) -> usize {
        self.stream.len()
    }

    /// True if no samples have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.stream.is_empty()
    }

    /// Normalizes the accumulated stream into 16-bit samples.
    ///
    /// # Errors
    /// [`crate::ConvertError::DegenerateSignal`] if the stream is empty or
    /// all-zero.
    pub fn finish(self) -> ConvertResult<Vec<i16>> {
        normalize(&self.stream)
    }
}

/// Converts a batch of image files into one normalized sample stream.
///
/// Convenience wrapper over [`Sequencer`] for callers that do not need
/// per-image progress reporting.
pub fn convert_images<P: AsRef<Path>>(
    paths: &[P],
    params: &ConversionParams,
) -> ConvertResult<Vec<i16>> {
    let mut sequencer = Sequencer::new(*params)?;
    for path in paths {
        let grid = PixelGrid::from_path(path.as_ref())?;
        sequencer.push(&grid)?;
    }
    sequencer.finish()
}
