//! CV analysis pipeline.
//!
//! Flow: validated request → extract text → generate cover letter.
//! Strictly linear; no retries, no caching.

use tracing::{info, warn};

use crate::analysis::extractor::TextExtractor;
use crate::analysis::letter::{CoverLetterGenerator, GenerationError};
use crate::analysis::models::AnalysisRequest;
use crate::analysis::validator::MSG_NO_TEXT_EXTRACTED;
use crate::errors::AppError;

/// Runs extraction and generation for an already validated request.
///
/// A document that parses but yields no text is a validation failure, not an
/// extraction error. A blank letter from any generator is a generation error.
pub async fn run_analysis(
    extractor: &dyn TextExtractor,
    generator: &dyn CoverLetterGenerator,
    request: AnalysisRequest,
) -> Result<String, AppError> {
    let cv_text = extractor.extract_text(request.cv_file).await?;

    if cv_text.trim().is_empty() {
        warn!("No text extracted from {} byte PDF", request.file_size);
        return Err(AppError::Validation(MSG_NO_TEXT_EXTRACTED.to_string()));
    }
    info!("Extracted {} chars of CV text", cv_text.len());

    let cover_letter = generator
        .generate(&cv_text, &request.job_description)
        .await?;
    if cover_letter.trim().is_empty() {
        return Err(GenerationError("generator returned an empty cover letter".to_string()).into());
    }
    info!("Generated cover letter ({} chars)", cover_letter.len());

    Ok(cover_letter)
}
