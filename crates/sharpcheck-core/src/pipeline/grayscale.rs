//! Grayscale reduction.
//!
//! Collapses a multi-channel pixel buffer into a single-channel luminance
//! buffer using the standard Rec. 601 luma weights.

use crate::domain::{GrayscaleBuffer, PixelBuffer};
use crate::error::{AnalysisError, Result};

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Reduces a pixel buffer to luminance.
///
/// Single-channel input passes through unchanged. Three-channel input (R, G,
/// B order) combines via `0.299*R + 0.587*G + 0.114*B`. Four-channel input
/// uses the first three channels and ignores alpha entirely; alpha never
/// weights luminance.
///
/// # Errors
///
/// Returns [`AnalysisError::UnsupportedChannelCount`] for any channel count
/// other than 1, 3 or 4.
pub fn reduce(pixels: &PixelBuffer) -> Result<GrayscaleBuffer> {
    let samples = pixels.samples();
    let luma = match pixels.channels() {
        1 => samples.iter().map(|&v| f32::from(v)).collect(),
        c @ (3 | 4) => {
            let step = usize::from(c);
            samples
                .chunks_exact(step)
                .map(|px| {
                    LUMA_R * f32::from(px[0]) + LUMA_G * f32::from(px[1]) + LUMA_B * f32::from(px[2])
                })
                .collect()
        }
        other => return Err(AnalysisError::UnsupportedChannelCount(other)),
    };
    Ok(GrayscaleBuffer::new(pixels.width(), pixels.height(), luma))
}
