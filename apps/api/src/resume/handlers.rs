//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::resume::analysis::{compare, ResumeComparison};
use crate::resume::extract::{extract_text, ExtractedDocument, UploadedDocument};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub resume_text: String,
    pub job_description: String,
}

/// POST /api/v1/resume/compare
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<ResumeComparison>, AppError> {
    let comparison = compare(
        state.llm.as_ref(),
        &request.resume_text,
        &request.job_description,
    )
    .await?;
    Ok(Json(comparison))
}

/// POST /api/v1/resume/extract
///
/// Multipart upload with a single `file` field (.pdf, .txt, .md).
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractedDocument>, AppError> {
    let mut upload: Option<UploadedDocument> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("file field must carry a filename".to_string()))?;
        let data = field.bytes().await.map_err(multipart_error)?;
        upload = Some(UploadedDocument { filename, data });
        break;
    }

    let upload =
        upload.ok_or_else(|| AppError::Validation("multipart field 'file' is required".to_string()))?;

    // PDF parsing is CPU-bound and may panic on malformed input.
    let document = tokio::task::spawn_blocking(move || extract_text(upload))
        .await
        .map_err(|e| AppError::UnprocessableEntity(format!("Document could not be parsed: {e}")))??;

    Ok(Json(document))
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    if e.status() == axum::http::StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}
