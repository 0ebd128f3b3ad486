//! PDF text extraction behind a pluggable trait.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`; tests swap in stubs that never parse PDFs.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
#[error("Failed to extract text from PDF: {0}")]
pub struct ExtractionError(pub String);

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns the document's plain text, or `""` when it parses but has no text.
    async fn extract_text(&self, pdf: Bytes) -> Result<String, ExtractionError>;
}

/// `pdf-extract` backed extractor. Plain character-stream extraction, no layout analysis.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(&self, pdf: Bytes) -> Result<String, ExtractionError> {
        // Parsing is CPU-bound; keep it off the async workers.
        tokio::task::spawn_blocking(move || extract_pages(&pdf))
            .await
            .map_err(|e| {
                let reason = match e.try_into_panic() {
                    Ok(payload) => payload
                        .downcast_ref::<&str>()
                        .map(|s| s.to_string())
                        .or_else(|| payload.downcast_ref::<String>().cloned())
                        .unwrap_or_else(|| "parser panicked".to_string()),
                    Err(e) => e.to_string(),
                };
                ExtractionError(reason)
            })?
    }
}

/// One line per page in document order, trimmed as a whole.
fn extract_pages(pdf: &[u8]) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(pdf)
        .map_err(|e| ExtractionError(e.to_string()))?;

    let mut text = String::new();
    for page in &pages {
        text.push_str(page);
        text.push('\n');
    }

    debug!("Extracted {} pages, {} chars", pages.len(), text.len());
    Ok(text.trim().to_string())
}
