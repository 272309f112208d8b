//! Synthetic image builders.

use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use sharpcheck_core::PixelBuffer;

/// Builder for synthetic test images with known focus characteristics.
pub struct SyntheticImage;

impl SyntheticImage {
    /// Uniform single-channel image: focus score exactly 0, always blurry.
    #[must_use]
    pub fn uniform(width: u32, height: u32, value: u8) -> PixelBuffer {
        let samples = vec![value; (width * height) as usize];
        PixelBuffer::new(width, height, 1, samples).expect("uniform buffer")
    }

    /// High-contrast 1-pixel checkerboard: very high focus score.
    #[must_use]
    pub fn checkerboard(width: u32, height: u32) -> PixelBuffer {
        let samples = (0..height)
            .flat_map(|y| (0..width).map(move |x| if (x + y) % 2 == 0 { 255u8 } else { 0u8 }))
            .collect();
        PixelBuffer::new(width, height, 1, samples).expect("checkerboard buffer")
    }

    /// Smooth horizontal gradient: low but nonzero edge response.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn horizontal_gradient(width: u32, height: u32) -> PixelBuffer {
        let samples = (0..height)
            .flat_map(|_| (0..width).map(move |x| ((x * 255) / width.max(1)) as u8))
            .collect();
        PixelBuffer::new(width, height, 1, samples).expect("gradient buffer")
    }

    /// Uniform RGB image.
    #[must_use]
    pub fn rgb_uniform(width: u32, height: u32, rgb: [u8; 3]) -> PixelBuffer {
        let samples = (0..width * height).flat_map(|_| rgb).collect();
        PixelBuffer::new(width, height, 3, samples).expect("rgb buffer")
    }

    /// Uniform RGBA image with the given alpha.
    #[must_use]
    pub fn rgba_uniform(width: u32, height: u32, rgb: [u8; 3], alpha: u8) -> PixelBuffer {
        let samples = (0..width * height)
            .flat_map(|_| [rgb[0], rgb[1], rgb[2], alpha])
            .collect();
        PixelBuffer::new(width, height, 4, samples).expect("rgba buffer")
    }

    /// 1x1 image (degenerate case).
    #[must_use]
    pub fn single_pixel(value: u8) -> PixelBuffer {
        PixelBuffer::new(1, 1, 1, vec![value]).expect("1x1 buffer")
    }

    /// 2x2 single-channel image from explicit row-major values.
    #[must_use]
    pub fn tiny(values: [u8; 4]) -> PixelBuffer {
        PixelBuffer::new(2, 2, 1, values.to_vec()).expect("2x2 buffer")
    }

    /// Converts a pixel buffer back into a dynamic image, so tests can
    /// encode it to PNG/JPEG on disk.
    ///
    /// # Panics
    ///
    /// Panics on channel counts other than 1, 3 or 4; builders here never
    /// produce those.
    #[must_use]
    pub fn to_dynamic_image(pixels: &PixelBuffer) -> DynamicImage {
        let (w, h) = (pixels.width(), pixels.height());
        let samples = pixels.samples().to_vec();
        match pixels.channels() {
            1 => DynamicImage::ImageLuma8(
                GrayImage::from_raw(w, h, samples).expect("luma dimensions"),
            ),
            3 => DynamicImage::ImageRgb8(
                RgbImage::from_raw(w, h, samples).expect("rgb dimensions"),
            ),
            4 => DynamicImage::ImageRgba8(
                RgbaImage::from_raw(w, h, samples).expect("rgba dimensions"),
            ),
            other => panic!("unsupported channel count {other}"),
        }
    }

    /// Encodes a pixel buffer as PNG bytes in memory.
    ///
    /// # Panics
    ///
    /// Panics if PNG encoding fails, which synthetic buffers never trigger.
    #[must_use]
    pub fn to_png_bytes(pixels: &PixelBuffer) -> Vec<u8> {
        let mut bytes = Vec::new();
        Self::to_dynamic_image(pixels)
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .expect("png encode");
        bytes
    }
}
