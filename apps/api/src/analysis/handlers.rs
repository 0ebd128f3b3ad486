//! Axum route handler for the CV analysis API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::models::AnalysisResponse;
use crate::analysis::pipeline::run_analysis;
use crate::analysis::validator::{read_form, validate, MSG_NOT_MULTIPART};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/analyze-cv
///
/// Multipart body with `cvFile` (PDF) and `jobDescription` (text).
/// Validation failures short-circuit before any extraction or generation work.
pub async fn handle_analyze_cv(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let request_id = Uuid::new_v4();

    async move {
        let multipart = multipart.map_err(|_| AppError::Validation(MSG_NOT_MULTIPART.to_string()))?;
        let form = read_form(multipart).await?;
        let request = validate(form)?;
        info!(
            "Analyzing CV ({} bytes, {}, {} job description chars)",
            request.file_size,
            request.content_type,
            request.job_description.len()
        );

        let cover_letter = run_analysis(
            state.extractor.as_ref(),
            state.generator.as_ref(),
            request,
        )
        .await?;

        Ok(Json(AnalysisResponse::success(cover_letter)))
    }
    .instrument(info_span!("analyze_cv", %request_id))
    .await
}
