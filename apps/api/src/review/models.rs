use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{AppError, FieldError};

/// Request body for `POST /review_resume`.
#[derive(Debug, Clone)]
pub struct ReviewRequest {
    pub job_description: String,
    pub resume_text: String,
}

impl ReviewRequest {
    /// Builds a request from a raw JSON body, reporting every offending field at once:
    /// absent or null fields are `missing`, non-strings are `string_type`,
    /// whitespace-only strings are `value_error`.
    pub fn from_json(body: &Value) -> Result<Self, AppError> {
        let Some(object) = body.as_object() else {
            return Err(AppError::field(FieldError::new(
                "",
                "Input should be a valid JSON object",
                "model_attributes_type",
            )));
        };

        let mut errors = Vec::new();
        let mut string_field = |field: &str| match object.get(field) {
            None | Some(Value::Null) => {
                errors.push(FieldError::missing(field));
                None
            }
            Some(Value::String(text)) if text.trim().is_empty() => {
                errors.push(FieldError::blank(field));
                None
            }
            Some(Value::String(text)) => Some(text.clone()),
            Some(_) => {
                errors.push(FieldError::new(
                    field,
                    "Input should be a valid string",
                    "string_type",
                ));
                None
            }
        };

        // Checked in declaration order so `detail` lists fields the same way.
        let job_description = string_field("job_description");
        let resume_text = string_field("resume_text");

        match (job_description, resume_text) {
            (Some(job_description), Some(resume_text)) => Ok(Self {
                job_description,
                resume_text,
            }),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

/// Structured review produced by the model, and the response body of the review endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeReview {
    /// General summary of how well the resume aligns with the job description.
    pub review: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    /// Job description keywords found in the resume.
    pub matched_keywords: Vec<String>,
    /// Job description keywords absent from the resume.
    pub missing_keywords: Vec<String>,
}

impl ResumeReview {
    /// Cleans model output in place:
    /// - trims every entry and drops empty ones
    /// - removes case-insensitive duplicates, keeping the first occurrence
    /// - drops missing keywords that also appear as matched
    pub fn normalize(mut self) -> Self {
        self.review = self.review.trim().to_string();
        for list in [
            &mut self.strengths,
            &mut self.weaknesses,
            &mut self.suggestions,
            &mut self.matched_keywords,
            &mut self.missing_keywords,
        ] {
            dedup_in_place(list);
        }

        let matched: HashSet<String> = self
            .matched_keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect();
        self.missing_keywords
            .retain(|k| !matched.contains(&k.to_lowercase()));

        self
    }
}

fn dedup_in_place(list: &mut Vec<String>) {
    let mut seen = HashSet::new();
    let entries = std::mem::take(list);
    list.extend(
        entries
            .into_iter()
            .map(|entry| entry.trim().to_string())
            .filter(|entry| !entry.is_empty() && seen.insert(entry.to_lowercase())),
    );
}
