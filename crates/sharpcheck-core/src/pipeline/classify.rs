//! Threshold comparison.

use crate::domain::{BlurReport, Classification};
use crate::error::{AnalysisError, Result};

/// Compares a focus score against a threshold.
///
/// `Blurry` iff `score < threshold`; a score exactly equal to the threshold
/// is `Clear`. The raw score passes through unchanged for reporting.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidScore`] if either value is NaN or
/// infinite. The comparison itself never fails for finite inputs.
pub fn classify(score: f64, threshold: f64) -> Result<BlurReport> {
    if !score.is_finite() || !threshold.is_finite() {
        return Err(AnalysisError::InvalidScore);
    }

    let classification = if score < threshold {
        Classification::Blurry
    } else {
        Classification::Clear
    };

    Ok(BlurReport {
        classification,
        focus_score: score,
        threshold,
    })
}
