// LLM prompt constants for cover letter generation.

/// System-role instruction. Sent verbatim.
pub const COVER_LETTER_SYSTEM: &str = "You are a professional career advisor and expert cover letter writer. Create compelling, personalized cover letters that highlight the most relevant qualifications for specific job opportunities.";

/// User prompt template. Replace `{cv_text}` and `{job_description}` before sending.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = "Based on the following CV and job description, write a professional cover letter that is 2-3 paragraphs long. The cover letter should:

1. Highlight the most relevant experience and skills from the CV that match the job requirements
2. Demonstrate enthusiasm for the specific role and company
3. Be professional, engaging, and personalized
4. Avoid generic statements and focus on specific achievements and qualifications
5. Show clear understanding of how the candidate's background aligns with the job requirements

CV:
{cv_text}

Job Description:
{job_description}

Please write a compelling cover letter that would make this candidate stand out for this specific position:";

/// Interpolates both values verbatim. No truncation.
///
/// Substitution is positional so placeholder-like text inside the CV is left alone.
pub fn build_cover_letter_prompt(cv_text: &str, job_description: &str) -> String {
    let (head, rest) = COVER_LETTER_PROMPT_TEMPLATE
        .split_once("{cv_text}")
        .unwrap_or((COVER_LETTER_PROMPT_TEMPLATE, ""));
    let (middle, tail) = rest.split_once("{job_description}").unwrap_or((rest, ""));

    let mut prompt =
        String::with_capacity(head.len() + cv_text.len() + middle.len() + job_description.len() + tail.len());
    prompt.push_str(head);
    prompt.push_str(cv_text);
    prompt.push_str(middle);
    prompt.push_str(job_description);
    prompt.push_str(tail);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_has_exact_structure() {
        let prompt = build_cover_letter_prompt("Rust engineer, 5 years", "Backend role at Acme");
        assert!(prompt.starts_with(
            "Based on the following CV and job description, write a professional cover letter that is 2-3 paragraphs long."
        ));
        assert!(prompt.contains("\n\nCV:\nRust engineer, 5 years\n\nJob Description:\nBackend role at Acme\n\n"));
        assert!(prompt.ends_with(
            "Please write a compelling cover letter that would make this candidate stand out for this specific position:"
        ));
        assert!(!prompt.contains("{cv_text}"));
        assert!(!prompt.contains("{job_description}"));
    }

    #[test]
    fn test_placeholder_text_inside_cv_is_not_reinterpolated() {
        let prompt = build_cover_letter_prompt("I wrote {job_description} once", "JD");
        assert!(prompt.contains("CV:\nI wrote {job_description} once\n"));
        assert!(prompt.contains("Job Description:\nJD\n"));
    }

    #[test]
    fn test_system_instruction_is_verbatim() {
        assert!(COVER_LETTER_SYSTEM.starts_with("You are a professional career advisor"));
        assert!(COVER_LETTER_SYSTEM.ends_with("for specific job opportunities."));
    }
}
