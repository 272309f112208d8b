//! Discrete 3×3 Laplacian filter with clamp-to-edge borders.
//!
//! The kernel is `[[0,1,0],[1,-4,1],[0,1,0]]`: each response is the sum of
//! the four axis neighbors minus four times the center. Out-of-bounds
//! neighbor reads clamp to the nearest in-bounds pixel, so every pixel has a
//! defined response, down to a 1×1 image whose neighbors are all itself.

use crate::domain::{FilterResponse, GrayscaleBuffer};
use crate::error::{AnalysisError, Result};

/// Applies the Laplacian kernel to a luminance buffer.
///
/// Output has the same dimensions as the input. Samples are signed and
/// unclamped.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyBuffer`] if width or height is zero.
pub fn filter(gray: &GrayscaleBuffer) -> Result<FilterResponse> {
    let w = gray.width() as usize;
    let h = gray.height() as usize;
    if w == 0 || h == 0 {
        return Err(AnalysisError::EmptyBuffer);
    }

    let src = gray.samples();
    let mut out = vec![0.0f32; w * h];

    for y in 0..h {
        let row = &src[y * w..(y + 1) * w];
        let above = &src[y.saturating_sub(1) * w..y.saturating_sub(1) * w + w];
        let below = &src[(y + 1).min(h - 1) * w..(y + 1).min(h - 1) * w + w];
        let out_row = &mut out[y * w..(y + 1) * w];

        for x in 0..w {
            let left = row[x.saturating_sub(1)];
            let right = row[(x + 1).min(w - 1)];
            let neighbors = left + right + above[x] + below[x];
            out_row[x] = neighbors - 4.0 * row[x];
        }
    }

    Ok(FilterResponse::new(gray.width(), gray.height(), out))
}
