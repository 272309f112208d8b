//! In-memory image buffers flowing through the pipeline.
//!
//! All buffers are row-major and immutable once constructed. Each one is
//! owned by exactly one analysis call and discarded when the call returns;
//! nothing here is shared across concurrent requests.

use crate::error::AnalysisError;

/// Canonical representation of decoded image data.
///
/// Samples are channel-interleaved in row-major order, one byte per sample.
/// Invariant: `samples.len() == width * height * channels`, enforced at
/// construction.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: u8,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a pixel buffer, validating the sample-count invariant.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidImage`] if the sample count does not
    /// match `width * height * channels`.
    pub fn new(
        width: u32,
        height: u32,
        channels: u8,
        samples: Vec<u8>,
    ) -> Result<Self, AnalysisError> {
        let expected = width as usize * height as usize * usize::from(channels);
        if samples.len() != expected {
            return Err(AnalysisError::InvalidImage(format!(
                "sample count mismatch: expected {expected}, got {}",
                samples.len()
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            samples,
        })
    }

    /// Image width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of interleaved channels per pixel.
    #[must_use]
    pub const fn channels(&self) -> u8 {
        self.channels
    }

    /// Raw interleaved samples.
    #[must_use]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }
}

/// Single-channel luminance buffer derived from one [`PixelBuffer`].
///
/// One `f32` sample per pixel, never mutated after creation.
#[derive(Debug, Clone)]
pub struct GrayscaleBuffer {
    width: u32,
    height: u32,
    samples: Vec<f32>,
}

impl GrayscaleBuffer {
    pub(crate) fn new(width: u32, height: u32, samples: Vec<f32>) -> Self {
        debug_assert_eq!(samples.len(), width as usize * height as usize);
        Self {
            width,
            height,
            samples,
        }
    }

    /// Image width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Luminance samples in row-major order.
    #[must_use]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}

/// Signed Laplacian response, same dimensions as its source buffer.
///
/// Samples may be negative; no clamping or rescaling is applied so the
/// variance calculator sees the true spread.
#[derive(Debug, Clone)]
pub struct FilterResponse {
    width: u32,
    height: u32,
    samples: Vec<f32>,
}

impl FilterResponse {
    pub(crate) fn new(width: u32, height: u32, samples: Vec<f32>) -> Self {
        debug_assert_eq!(samples.len(), width as usize * height as usize);
        Self {
            width,
            height,
            samples,
        }
    }

    /// Image width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Filter output in row-major order.
    #[must_use]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_buffer_validates_length() {
        let buf = PixelBuffer::new(2, 2, 3, vec![0u8; 12]);
        assert!(buf.is_ok());

        let err = PixelBuffer::new(2, 2, 3, vec![0u8; 11]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidImage(_)));
    }

    #[test]
    fn test_pixel_buffer_accessors() {
        let buf = PixelBuffer::new(3, 2, 1, vec![7u8; 6]).expect("valid buffer");
        assert_eq!(buf.width(), 3);
        assert_eq!(buf.height(), 2);
        assert_eq!(buf.channels(), 1);
        assert_eq!(buf.samples().len(), 6);
    }

    #[test]
    fn test_zero_sized_buffer_is_constructible() {
        // Dimension checks belong to the filter stage, not construction.
        let buf = PixelBuffer::new(0, 5, 3, vec![]);
        assert!(buf.is_ok());
    }
}
