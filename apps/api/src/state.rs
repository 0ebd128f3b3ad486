use std::sync::Arc;

use crate::analysis::extractor::TextExtractor;
use crate::analysis::letter::CoverLetterGenerator;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable PDF text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Pluggable letter generator. Default: OpenAiCoverLetterGenerator.
    pub generator: Arc<dyn CoverLetterGenerator>,
    pub config: Config,
}
