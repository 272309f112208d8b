//! Analysis orchestrator.

use tracing::debug;

use crate::domain::{BlurReport, PixelBuffer, DEFAULT_THRESHOLD};
use crate::error::Result;
use crate::pipeline::{classify, grayscale, laplacian, variance};
use crate::ports::ImageDecoder;

/// Sequences the numeric pipeline for one analysis call.
///
/// Stateless: each call owns its buffers exclusively and retains nothing
/// afterwards, so one analyzer may be shared freely across threads. The
/// threshold is an explicit construction parameter, never read from ambient
/// state.
#[derive(Debug, Clone, Copy)]
pub struct BlurAnalyzer {
    threshold: f64,
}

impl BlurAnalyzer {
    /// Creates an analyzer with the given focus-score threshold.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// The threshold this analyzer compares against.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Classifies an already-decoded pixel buffer.
    ///
    /// # Errors
    ///
    /// Propagates the first stage failure: [`crate::AnalysisError`] variants
    /// for unsupported channel counts, empty buffers, and non-finite scores.
    pub fn analyze(&self, pixels: &PixelBuffer) -> Result<BlurReport> {
        let gray = grayscale::reduce(pixels)?;
        let response = laplacian::filter(&gray)?;
        let score = variance::population_variance(&response);
        let report = classify::classify(score, self.threshold)?;
        debug!(
            focus_score = report.focus_score,
            threshold = report.threshold,
            classification = %report.classification,
            "analysis complete"
        );
        Ok(report)
    }

    /// Decodes raw image bytes through the given collaborator, then
    /// classifies the result.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AnalysisError::InvalidImage`] when decoding fails,
    /// or any pipeline error from [`Self::analyze`].
    pub fn analyze_bytes(&self, decoder: &dyn ImageDecoder, bytes: &[u8]) -> Result<BlurReport> {
        let pixels = decoder.decode(bytes)?;
        self.analyze(&pixels)
    }
}

impl Default for BlurAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Classification;
    use crate::error::AnalysisError;

    fn luma_buffer(w: u32, h: u32, samples: Vec<u8>) -> PixelBuffer {
        PixelBuffer::new(w, h, 1, samples).expect("valid buffer")
    }

    /// 1-px checkerboard, alternating 0/255.
    fn checkerboard(w: u32, h: u32) -> PixelBuffer {
        let samples = (0..h)
            .flat_map(|y| (0..w).map(move |x| if (x + y) % 2 == 0 { 255u8 } else { 0u8 }))
            .collect();
        luma_buffer(w, h, samples)
    }

    #[test]
    fn test_uniform_image_is_blurry() {
        let analyzer = BlurAnalyzer::default();
        for (w, h) in [(1, 1), (3, 1), (1, 7), (16, 16)] {
            let pixels = luma_buffer(w, h, vec![200u8; (w * h) as usize]);
            let report = analyzer.analyze(&pixels).expect("analyze");
            assert_eq!(report.focus_score, 0.0);
            assert_eq!(report.classification, Classification::Blurry);
        }
    }

    #[test]
    fn test_checkerboard_is_clear() {
        let analyzer = BlurAnalyzer::default();
        let report = analyzer.analyze(&checkerboard(4, 4)).expect("analyze");
        assert!(report.focus_score > 5000.0, "got {}", report.focus_score);
        assert_eq!(report.classification, Classification::Clear);
    }

    #[test]
    fn test_4x4_checkerboard_exact_score() {
        // Corners respond with |2(255)| = 510, non-corner edges with 765,
        // interior with 1020; the signs balance so the mean is zero.
        let analyzer = BlurAnalyzer::default();
        let report = analyzer.analyze(&checkerboard(4, 4)).expect("analyze");
        assert_eq!(report.focus_score, 617_737.5);
    }

    #[test]
    fn test_2x2_reference_scenario() {
        // Luminance [0, 255, 255, 0] responds [510, -510, -510, 510];
        // variance 260100, clear at the default threshold.
        let analyzer = BlurAnalyzer::default();
        let report = analyzer
            .analyze(&luma_buffer(2, 2, vec![0, 255, 255, 0]))
            .expect("analyze");
        assert_eq!(report.focus_score, 260_100.0);
        assert_eq!(report.classification, Classification::Clear);
    }

    #[test]
    fn test_single_pixel_image() {
        let analyzer = BlurAnalyzer::default();
        let report = analyzer.analyze(&luma_buffer(1, 1, vec![42])).expect("analyze");
        assert_eq!(report.focus_score, 0.0);
        assert_eq!(report.classification, Classification::Blurry);
    }

    #[test]
    fn test_score_at_threshold_is_clear() {
        // Threshold chosen to hit the 2x2 reference score exactly.
        let analyzer = BlurAnalyzer::new(260_100.0);
        let report = analyzer
            .analyze(&luma_buffer(2, 2, vec![0, 255, 255, 0]))
            .expect("analyze");
        assert_eq!(report.classification, Classification::Clear);
    }

    #[test]
    fn test_rgb_and_rgba_scores_match() {
        let rgb: Vec<u8> = (0..48).map(|i| (i * 5) as u8).collect();
        let mut rgba = Vec::new();
        for px in rgb.chunks_exact(3) {
            rgba.extend_from_slice(px);
            rgba.push(173); // arbitrary alpha
        }
        let a = PixelBuffer::new(4, 4, 3, rgb).expect("rgb buffer");
        let b = PixelBuffer::new(4, 4, 4, rgba).expect("rgba buffer");

        let analyzer = BlurAnalyzer::default();
        let ra = analyzer.analyze(&a).expect("analyze rgb");
        let rb = analyzer.analyze(&b).expect("analyze rgba");
        assert_eq!(ra.focus_score.to_bits(), rb.focus_score.to_bits());
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let analyzer = BlurAnalyzer::default();
        let pixels = checkerboard(9, 7);
        let first = analyzer.analyze(&pixels).expect("first run");
        let second = analyzer.analyze(&pixels).expect("second run");
        assert_eq!(first.focus_score.to_bits(), second.focus_score.to_bits());
        assert_eq!(first.classification, second.classification);
    }

    #[test]
    fn test_nan_threshold_is_invalid_score() {
        let analyzer = BlurAnalyzer::new(f64::NAN);
        let err = analyzer.analyze(&luma_buffer(1, 1, vec![0])).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidScore));
    }

    #[test]
    fn test_decode_failure_propagates() {
        struct FailingDecoder;
        impl ImageDecoder for FailingDecoder {
            fn decode(&self, _bytes: &[u8]) -> crate::error::Result<PixelBuffer> {
                Err(AnalysisError::InvalidImage("truncated".into()))
            }
        }

        let analyzer = BlurAnalyzer::default();
        let err = analyzer.analyze_bytes(&FailingDecoder, &[]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidImage(_)));
    }
}
