//! API response and error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use sharpcheck_core::{AnalysisError, BlurReport, Classification};

/// Successful analysis response body.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Always `"success"` on the 200 path.
    pub status: &'static str,
    /// Blur/clear decision.
    pub classification: Classification,
    /// Convenience boolean mirror of the classification.
    pub is_blurry: bool,
    /// Focus score rounded to two decimal places for display.
    pub blurriness_score: f64,
    /// Human-readable summary.
    pub message: String,
}

impl From<&BlurReport> for AnalyzeResponse {
    fn from(report: &BlurReport) -> Self {
        Self {
            status: "success",
            classification: report.classification,
            is_blurry: report.is_blurry(),
            blurriness_score: report.rounded_score(),
            message: report.message(),
        }
    }
}

/// API error carrying the HTTP status to respond with.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Client-side problem: malformed upload, bad threshold, bad image.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// Unexpected internal failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    #[cfg(test)]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[cfg(test)]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            // Bad input: undecodable bytes, odd channel layouts, empty images.
            AnalysisError::InvalidImage(_)
            | AnalysisError::UnsupportedChannelCount(_)
            | AnalysisError::EmptyBuffer => Self::bad_request(err.to_string()),
            // Numeric failure inside the pipeline is ours, not the caller's.
            AnalysisError::InvalidScore => Self::internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
