use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::analysis::extractor::ExtractionError;
use crate::analysis::letter::GenerationError;
use crate::analysis::models::AnalysisResponse;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client input rejected before any extraction or generation work.
    #[error("{0}")]
    Validation(String),

    #[error("Failed to read form data: {0}")]
    Multipart(String),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => {
                tracing::warn!("Rejected analysis request: {msg}");
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            pipeline_error => {
                tracing::error!("Analysis pipeline error: {pipeline_error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(AnalysisResponse::failure(&pipeline_error)),
                )
                    .into_response()
            }
        }
    }
}
