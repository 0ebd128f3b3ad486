//! Request validation for `POST /api/analyze-cv`.
//!
//! The whole form is read into a [`CvForm`] first, then [`validate`] runs the
//! checks in a fixed order and stops at the first failure.

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::debug;

use crate::analysis::models::AnalysisRequest;
use crate::errors::AppError;

pub const CV_FIELD: &str = "cvFile";
pub const JOB_DESCRIPTION_FIELD: &str = "jobDescription";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";
/// 5 MiB.
pub const MAX_CV_FILE_BYTES: usize = 5 * 1024 * 1024;

pub const MSG_NOT_MULTIPART: &str = "Request must be multipart/form-data";
pub const MSG_JOB_DESCRIPTION_REQUIRED: &str = "Job description is required";
pub const MSG_CV_FILE_REQUIRED: &str = "CV PDF file is required";
pub const MSG_ONLY_PDF: &str = "Only PDF files are allowed";
pub const MSG_FILE_TOO_LARGE: &str = "File size cannot exceed 5MB";
pub const MSG_NO_TEXT_EXTRACTED: &str = "Could not extract text from the PDF file";

/// A file part as received, before any checks.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Raw form contents relevant to the analysis.
#[derive(Debug, Clone, Default)]
pub struct CvForm {
    pub job_description: Option<String>,
    pub cv_file: Option<UploadedFile>,
}

/// Drains the multipart stream into memory.
///
/// Parts with a filename are files; the rest are text values. Repeated
/// `jobDescription` values are joined with `,` and the first `cvFile` file wins.
pub async fn read_form(mut multipart: Multipart) -> Result<CvForm, AppError> {
    let mut job_description: Vec<String> = Vec::new();
    let mut cv_file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(e.body_text()))?
    {
        let name = field.name().unwrap_or("").to_string();
        let file_name = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);

        match (name.as_str(), file_name) {
            (CV_FIELD, Some(file_name)) if cv_file.is_none() => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Multipart(e.body_text()))?;
                debug!("Received '{file_name}' ({} bytes, {content_type:?})", data.len());
                cv_file = Some(UploadedFile {
                    content_type,
                    data,
                });
            }
            (JOB_DESCRIPTION_FIELD, None) => {
                let value = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Multipart(e.body_text()))?;
                // Invalid UTF-8 is replaced, not rejected.
                job_description.push(String::from_utf8_lossy(&value).into_owned());
            }
            _ => {
                // Unknown or duplicate parts are drained and ignored.
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Multipart(e.body_text()))?;
            }
        }
    }

    Ok(CvForm {
        job_description: (!job_description.is_empty()).then(|| job_description.join(",")),
        cv_file,
    })
}

/// Runs the ordered checks and builds the request on success.
pub fn validate(form: CvForm) -> Result<AnalysisRequest, AppError> {
    let job_description = match form.job_description {
        Some(jd) if !jd.trim().is_empty() => jd,
        _ => return Err(AppError::Validation(MSG_JOB_DESCRIPTION_REQUIRED.to_string())),
    };

    let file = match form.cv_file {
        Some(file) if !file.data.is_empty() => file,
        _ => return Err(AppError::Validation(MSG_CV_FILE_REQUIRED.to_string())),
    };

    if file.content_type.as_deref() != Some(PDF_CONTENT_TYPE) {
        return Err(AppError::Validation(MSG_ONLY_PDF.to_string()));
    }

    let file_size = file.data.len();
    if file_size > MAX_CV_FILE_BYTES {
        return Err(AppError::Validation(MSG_FILE_TOO_LARGE.to_string()));
    }

    Ok(AnalysisRequest {
        cv_file: file.data,
        content_type: PDF_CONTENT_TYPE.to_string(),
        file_size,
        job_description,
    })
}
