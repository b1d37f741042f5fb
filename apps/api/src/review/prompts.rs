// All LLM prompt constants for the review module.

use crate::llm_client::Schema;

/// System instruction for resume review.
pub const REVIEW_SYSTEM: &str = "You are an expert resume reviewer and technical recruiter. \
    You analyze a resume strictly against the job description you are given. \
    Do NOT invent experience the resume does not state.";

/// Review prompt template. Replace `{job_description}` and `{resume_text}` before sending.
pub const REVIEW_PROMPT_TEMPLATE: &str = r#"Analyze the resume below against the job description.
Provide a comprehensive review, highlighting strengths, weaknesses, and actionable suggestions.
Also identify keywords from the job description that are present in the resume and those that are missing.

Job Description:
---
{job_description}
---

Resume Text:
---
{resume_text}
---

Return a JSON object with the following keys:
- "review": A general summary of the resume's alignment with the job description.
- "strengths": A list of key strengths of the resume in relation to the job description.
- "weaknesses": A list of key weaknesses or areas for improvement.
- "suggestions": A list of actionable suggestions to improve the resume.
- "matched_keywords": A list of important keywords from the job description found in the resume.
- "missing_keywords": A list of important keywords from the job description that are missing from the resume."#;

/// Output keys in the order the model is asked to produce them.
pub const REVIEW_FIELDS: [&str; 6] = [
    "review",
    "strengths",
    "weaknesses",
    "suggestions",
    "matched_keywords",
    "missing_keywords",
];

/// Fills the template. User text is never re-scanned for placeholders.
pub fn build_review_prompt(job_description: &str, resume_text: &str) -> String {
    let fill_jd = |part: &str| part.replace("{job_description}", job_description.trim());
    match REVIEW_PROMPT_TEMPLATE.split_once("{resume_text}") {
        Some((head, tail)) => format!("{}{}{}", fill_jd(head), resume_text.trim(), fill_jd(tail)),
        None => fill_jd(REVIEW_PROMPT_TEMPLATE),
    }
}

/// Response schema handed to Gemini so the reply deserializes into `ResumeReview`.
pub fn review_schema() -> Schema {
    Schema::object(REVIEW_FIELDS.iter().map(|&field| {
        let property = if field == "review" {
            Schema::string()
        } else {
            Schema::array(Schema::string())
        };
        (field, property)
    }))
}
