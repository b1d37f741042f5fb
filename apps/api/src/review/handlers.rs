//! Axum route handlers for the Review API.

use axum::{
    extract::{multipart::MultipartRejection, FromRequest, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde_json::Value;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::{AppError, FieldError};
use crate::review::extract::extract_resume_text;
use crate::review::models::{ResumeReview, ReviewRequest};
use crate::state::AppState;

/// JSON body extractor whose rejections render as 422 validation errors.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

const JOB_DESCRIPTION_FIELD: &str = "job_description";
const RESUME_FIELD: &str = "resume";

/// POST /review_resume
///
/// Reviews resume text against a job description.
pub async fn handle_review_resume(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> Result<Json<ResumeReview>, AppError> {
    let request = ReviewRequest::from_json(&body)?;
    run_review(&state, request).await.map(Json)
}

/// POST /review_resume/upload
///
/// Multipart variant: `job_description` text field plus a `resume` file (PDF or plain text).
pub async fn handle_review_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ResumeReview>, AppError> {
    let mut multipart = multipart.map_err(|e| {
        AppError::field(FieldError::new("", e.body_text(), "multipart_invalid"))
    })?;

    let mut job_description: Option<String> = None;
    let mut resume: Option<(Bytes, Option<String>, Option<String>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(JOB_DESCRIPTION_FIELD) => {
                job_description = Some(field.text().await.map_err(multipart_error)?);
            }
            Some(RESUME_FIELD) => {
                let content_type = field.content_type().map(str::to_string);
                let file_name = field.file_name().map(str::to_string);
                let data = field.bytes().await.map_err(multipart_error)?;
                if data.len() > state.config.max_resume_bytes {
                    return Err(AppError::field(FieldError::new(
                        RESUME_FIELD,
                        format!(
                            "Resume file exceeds {} bytes",
                            state.config.max_resume_bytes
                        ),
                        "file_too_large",
                    )));
                }
                resume = Some((data, content_type, file_name));
            }
            _ => {}
        }
    }

    let mut missing = Vec::new();
    if job_description.is_none() {
        missing.push(FieldError::missing(JOB_DESCRIPTION_FIELD));
    }
    if resume.is_none() {
        missing.push(FieldError::missing(RESUME_FIELD));
    }
    let (Some(job_description), Some((data, content_type, file_name))) = (job_description, resume)
    else {
        return Err(AppError::Validation(missing));
    };

    if job_description.trim().is_empty() {
        return Err(AppError::field(FieldError::blank(JOB_DESCRIPTION_FIELD)));
    }

    let resume_text =
        extract_resume_text(RESUME_FIELD, data, content_type.as_deref(), file_name.as_deref())
            .await?;

    let request = ReviewRequest {
        job_description,
        resume_text,
    };
    run_review(&state, request).await.map(Json)
}

async fn run_review(state: &AppState, request: ReviewRequest) -> Result<ResumeReview, AppError> {
    let review_id = Uuid::new_v4();
    let span = info_span!("review", %review_id);

    async {
        info!(
            jd_chars = request.job_description.len(),
            resume_chars = request.resume_text.len(),
            "Reviewing resume"
        );
        state.reviewer.review(&request).await
    }
    .instrument(span)
    .await
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::field(FieldError::new("", e.body_text(), "multipart_invalid"))
}
