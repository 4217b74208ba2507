//! Axum route handler for PDF uploads.

use axum::extract::{multipart::MultipartError, Multipart};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::{extract_text_from_pdf, ExtractionError};

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub text: String,
    pub word_count: usize,
}

/// POST /api/v1/extract
///
/// Multipart upload with a single `file` field holding a PDF.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    let mut upload: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() == Some(FILE_FIELD) {
            upload = Some(field.bytes().await.map_err(multipart_error)?);
            break;
        }
    }

    let bytes = upload
        .ok_or_else(|| AppError::Validation(format!("multipart field '{FILE_FIELD}' is required")))?;
    let size = bytes.len();

    let text = tokio::task::spawn_blocking(move || extract_text_from_pdf(&bytes))
        .await
        .map_err(|e| {
            if e.is_panic() {
                // pdf-extract panics on some malformed documents.
                AppError::from(ExtractionError::UnreadablePdf("PDF parser failed".to_string()))
            } else {
                AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}"))
            }
        })?
        .inspect_err(|e| warn!(error = %e, size, "PDF extraction failed"))?;

    let word_count = text.split_whitespace().count();
    info!(size, word_count, "PDF extracted");

    Ok(Json(ExtractResponse { text, word_count }))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == axum::http::StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Failed to read multipart field: {}", e.body_text()))
    }
}
