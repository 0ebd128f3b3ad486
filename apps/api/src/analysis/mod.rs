// CV analysis: validate upload → extract PDF text → generate cover letter.
// All provider calls go through llm_client.

pub mod extractor;
pub mod handlers;
pub mod letter;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod validator;

#[cfg(test)]
pub mod test_support;
