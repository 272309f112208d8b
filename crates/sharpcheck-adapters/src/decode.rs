//! Image decoding adapter backed by the `image` crate.

use image::DynamicImage;
use sharpcheck_core::{AnalysisError, ImageDecoder, PixelBuffer};
use tracing::debug;

/// Decoder for compressed raster bytes (PNG, JPEG, GIF, ...).
///
/// Decoded images keep their natural channel count where the pipeline
/// supports it (Luma8 → 1, Rgb8 → 3, Rgba8 → 4); every other color type is
/// normalized to 8-bit RGB first so the reducer never sees a layout it
/// cannot interpret.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodecDecoder;

impl CodecDecoder {
    /// Creates a new decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Converts an already-decoded dynamic image into a pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidImage`] if buffer construction fails
    /// (dimension/sample mismatch, which a well-formed decode never
    /// produces).
    pub fn from_dynamic_image(image: &DynamicImage) -> Result<PixelBuffer, AnalysisError> {
        let (width, height) = (image.width(), image.height());
        match image {
            DynamicImage::ImageLuma8(luma) => {
                PixelBuffer::new(width, height, 1, luma.as_raw().clone())
            }
            DynamicImage::ImageRgb8(rgb) => {
                PixelBuffer::new(width, height, 3, rgb.as_raw().clone())
            }
            DynamicImage::ImageRgba8(rgba) => {
                PixelBuffer::new(width, height, 4, rgba.as_raw().clone())
            }
            other => {
                debug!(color = ?other.color(), "normalizing decoded image to rgb8");
                PixelBuffer::new(width, height, 3, other.to_rgb8().into_raw())
            }
        }
    }
}

impl ImageDecoder for CodecDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer, AnalysisError> {
        if bytes.is_empty() {
            return Err(AnalysisError::InvalidImage("zero-length input".into()));
        }

        let image = image::load_from_memory(bytes)
            .map_err(|e| AnalysisError::InvalidImage(e.to_string()))?;

        Self::from_dynamic_image(&image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    #[test]
    fn test_zero_length_input_rejected() {
        let err = CodecDecoder::new().decode(&[]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidImage(_)));
    }

    #[test]
    fn test_garbage_input_rejected() {
        let err = CodecDecoder::new().decode(b"not an image").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidImage(_)));
    }

    #[test]
    fn test_luma_image_keeps_single_channel() {
        let img = GrayImage::from_fn(3, 2, |x, _| Luma([x as u8 * 10]));
        let pixels = CodecDecoder::from_dynamic_image(&DynamicImage::ImageLuma8(img))
            .expect("convert");
        assert_eq!(pixels.channels(), 1);
        assert_eq!(pixels.samples(), &[0, 10, 20, 0, 10, 20]);
    }

    #[test]
    fn test_rgba_image_keeps_four_channels() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 4]));
        let pixels = CodecDecoder::from_dynamic_image(&DynamicImage::ImageRgba8(img))
            .expect("convert");
        assert_eq!(pixels.channels(), 4);
        assert_eq!(pixels.samples().len(), 16);
    }

    #[test]
    fn test_exotic_color_type_normalized_to_rgb() {
        let img = DynamicImage::new_luma16(2, 2);
        let pixels = CodecDecoder::from_dynamic_image(&img).expect("convert");
        assert_eq!(pixels.channels(), 3);
    }
}
