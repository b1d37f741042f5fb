//! Resume reviewer: pluggable, trait-based backend that turns a request into a `ResumeReview`.
//!
//! Default: `GeminiReviewer` (structured JSON output from gemini-2.5-flash).
//! `AppState` holds an `Arc<dyn ResumeReviewer>` so handlers never see the backend.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{GeminiClient, GenerationConfig, LlmError};
use crate::review::models::{ResumeReview, ReviewRequest};
use crate::review::prompts::{build_review_prompt, review_schema, REVIEW_SYSTEM};

/// Implement this to swap review backends without touching the handlers.
#[async_trait]
pub trait ResumeReviewer: Send + Sync {
    async fn review(&self, request: &ReviewRequest) -> Result<ResumeReview, AppError>;
}

/// Reviews resumes through Gemini with a response schema enforcing the review shape.
pub struct GeminiReviewer {
    llm: GeminiClient,
    generation_config: GenerationConfig,
    system: String,
}

impl GeminiReviewer {
    pub fn new(llm: GeminiClient) -> Self {
        Self {
            llm,
            generation_config: GenerationConfig::json(review_schema()),
            system: format!("{REVIEW_SYSTEM} {JSON_ONLY_SYSTEM}"),
        }
    }
}

#[async_trait]
impl ResumeReviewer for GeminiReviewer {
    async fn review(&self, request: &ReviewRequest) -> Result<ResumeReview, AppError> {
        let prompt = build_review_prompt(&request.job_description, &request.resume_text);
        debug!("Review prompt built ({} chars)", prompt.len());

        let review: ResumeReview = self
            .llm
            .call_json(&prompt, &self.system, &self.generation_config)
            .await
            .map_err(llm_to_app_error)?;

        let review = review.normalize();
        info!(
            matched = review.matched_keywords.len(),
            missing = review.missing_keywords.len(),
            "Resume review completed"
        );
        Ok(review)
    }
}

fn llm_to_app_error(error: LlmError) -> AppError {
    match error {
        LlmError::EmptyContent => AppError::EmptyContent,
        other => AppError::Llm(other.to_string()),
    }
}
