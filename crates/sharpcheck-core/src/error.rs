//! Typed errors for the analysis pipeline.

use thiserror::Error;

/// Errors produced while turning pixel data into a blur classification.
///
/// Every pipeline stage fails fast with one of these; the orchestrator never
/// attempts partial recovery since blur detection has no meaningful partial
/// result.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The input bytes could not be decoded into a pixel buffer.
    #[error("could not read image: {0}")]
    InvalidImage(String),

    /// The decoded buffer has a channel count the reducer cannot interpret.
    #[error("unsupported channel count: {0} (expected 1, 3 or 4)")]
    UnsupportedChannelCount(u8),

    /// The decoded buffer has zero width or height.
    #[error("image has zero width or height")]
    EmptyBuffer,

    /// A non-finite focus score or threshold reached the classifier.
    #[error("focus score or threshold is not a finite number")]
    InvalidScore,
}

/// Convenience alias used throughout the pipeline.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AnalysisError::InvalidImage("corrupt header".into());
        assert!(err.to_string().contains("corrupt header"));

        let err = AnalysisError::UnsupportedChannelCount(2);
        assert!(err.to_string().contains('2'));
    }
}
