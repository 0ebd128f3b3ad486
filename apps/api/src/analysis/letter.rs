//! Cover letter generation — one templated prompt, one chat completion.
//!
//! `AppState` holds an `Arc<dyn CoverLetterGenerator>`, so the pipeline can run
//! against a stub without network access.

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::analysis::prompts::{build_cover_letter_prompt, COVER_LETTER_SYSTEM};
use crate::llm_client::LlmClient;

#[derive(Debug, Error)]
#[error("Failed to generate cover letter: {0}")]
pub struct GenerationError(pub String);

#[async_trait]
pub trait CoverLetterGenerator: Send + Sync {
    /// Returns the generated letter trimmed of surrounding whitespace.
    async fn generate(&self, cv_text: &str, job_description: &str)
        -> Result<String, GenerationError>;
}

/// Generator backed by the OpenAI chat completions API.
///
/// Identical inputs always hit the provider again; nothing is cached.
pub struct OpenAiCoverLetterGenerator {
    llm: LlmClient,
}

impl OpenAiCoverLetterGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl CoverLetterGenerator for OpenAiCoverLetterGenerator {
    async fn generate(
        &self,
        cv_text: &str,
        job_description: &str,
    ) -> Result<String, GenerationError> {
        let prompt = build_cover_letter_prompt(cv_text, job_description);
        info!("Requesting cover letter ({} prompt chars)", prompt.len());

        self.llm
            .complete(COVER_LETTER_SYSTEM, &prompt)
            .await
            .map_err(|e| GenerationError(e.to_string()))
    }
}
