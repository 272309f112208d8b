//! Image decoder port.

use crate::domain::PixelBuffer;
use crate::error::Result;

/// Port for turning encoded image bytes into a pixel buffer.
///
/// Decoding correctness and performance are owned by the implementing codec
/// adapter, not by the core pipeline.
pub trait ImageDecoder: Send + Sync {
    /// Decodes encoded raster bytes (PNG, JPEG, GIF, ...) into a buffer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AnalysisError::InvalidImage`] for zero-length,
    /// truncated, corrupt, or unsupported input.
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer>;
}
