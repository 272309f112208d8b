//! Classification result types.

use serde::{Deserialize, Serialize};

/// Default focus-score threshold when no override is supplied.
pub const DEFAULT_THRESHOLD: f64 = 1000.0;

/// Binary blur classification.
///
/// `Blurry` iff the focus score is strictly below the threshold; a score
/// exactly equal to the threshold classifies as `Clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Focus score below the threshold.
    Blurry,
    /// Focus score at or above the threshold.
    Clear,
}

impl Classification {
    /// Lowercase label used in messages and wire output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blurry => "blurry",
            Self::Clear => "clear",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one analysis call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlurReport {
    /// Blur/clear decision.
    pub classification: Classification,
    /// Raw variance of the Laplacian response, unrounded.
    pub focus_score: f64,
    /// Threshold the score was compared against.
    pub threshold: f64,
}

impl BlurReport {
    /// Whether the image was classified as blurry.
    #[must_use]
    pub const fn is_blurry(&self) -> bool {
        matches!(self.classification, Classification::Blurry)
    }

    /// Focus score rounded to two decimal places for display.
    #[must_use]
    pub fn rounded_score(&self) -> f64 {
        (self.focus_score * 100.0).round() / 100.0
    }

    /// Human-readable summary: `"Image is {clear|blurry}."`.
    #[must_use]
    pub fn message(&self) -> String {
        format!("Image is {}.", self.classification)
    }
}
