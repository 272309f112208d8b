//! HTTP routes for the analysis endpoint.

use std::path::Path;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use sharpcheck_adapters::{has_allowed_extension, CodecDecoder};
use sharpcheck_core::BlurAnalyzer;
use tracing::{info, warn};

use crate::response::{AnalyzeResponse, ApiError};

/// Largest accepted upload, in bytes.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Shared per-request context.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    threshold: f64,
    decoder: CodecDecoder,
}

impl AppState {
    /// Creates server state with the given default threshold.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            decoder: CodecDecoder::new(),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route("/api/analyze_image", post(analyze_image))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Extracted multipart form content.
#[derive(Default)]
struct UploadForm {
    file_name: Option<String>,
    file_bytes: Option<Vec<u8>>,
    threshold: Option<f64>,
}

async fn read_form(multipart: &mut Multipart) -> Result<UploadForm, ApiError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("file") => {
                form.file_name = field.file_name().map(ToOwned::to_owned);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {e}")))?;
                form.file_bytes = Some(bytes.to_vec());
            }
            Some("threshold") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read threshold: {e}")))?;
                let value: f64 = text
                    .parse()
                    .map_err(|_| ApiError::bad_request("Threshold is not a valid number"))?;
                if !value.is_finite() || value <= 0.0 {
                    return Err(ApiError::bad_request(
                        "Threshold must be a finite positive number",
                    ));
                }
                form.threshold = Some(value);
            }
            other => {
                warn!(field = ?other, "ignoring unknown multipart field");
            }
        }
    }

    Ok(form)
}

/// `POST /api/analyze_image`: multipart upload with a required `file` field
/// and an optional `threshold` override. Bytes are decoded and analyzed in
/// memory; nothing is written to disk.
async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let form = read_form(&mut multipart).await?;

    let bytes = form
        .file_bytes
        .ok_or_else(|| ApiError::bad_request("No file part in the request"))?;
    let file_name = form.file_name.unwrap_or_default();
    if file_name.is_empty() {
        return Err(ApiError::bad_request("No selected file"));
    }
    if !has_allowed_extension(Path::new(&file_name)) {
        return Err(ApiError::bad_request(
            "Allowed file types are png, jpg, jpeg, gif",
        ));
    }

    let threshold = form.threshold.unwrap_or(state.threshold);
    let analyzer = BlurAnalyzer::new(threshold);
    let report = analyzer.analyze_bytes(&state.decoder, &bytes)?;

    info!(
        file = %file_name,
        score = report.rounded_score(),
        classification = %report.classification,
        "analyzed upload"
    );

    Ok(Json(AnalyzeResponse::from(&report)))
}
