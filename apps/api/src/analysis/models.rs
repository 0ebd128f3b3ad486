use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A validated analysis request. Lives for one HTTP request only.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub cv_file: Bytes,
    pub content_type: String,
    pub file_size: usize,
    pub job_description: String,
}

/// JSON body returned by `POST /api/analyze-cv` for success and pipeline failures.
///
/// Built only through [`AnalysisResponse::success`] and [`AnalysisResponse::failure`]
/// so that exactly one of `cover_letter_text` / `error_message` is meaningful.
/// `success` is only reached with a non-blank letter; `run_analysis` rejects blank ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub cover_letter_text: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl AnalysisResponse {
    pub fn success(cover_letter_text: String) -> Self {
        Self {
            cover_letter_text,
            success: true,
            error_message: None,
        }
    }

    /// Failure body; `message` is prefixed with "An error occurred: ".
    pub fn failure(message: impl std::fmt::Display) -> Self {
        Self {
            cover_letter_text: String::new(),
            success: false,
            error_message: Some(format!("An error occurred: {message}")),
        }
    }
}
