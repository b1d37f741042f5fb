use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Message returned when Gemini answers without any usable candidate text.
pub const EMPTY_CONTENT_MESSAGE: &str = "Gemini API did not return expected content.";

/// A single field-level validation failure, rendered inside `detail`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn missing(field: &str) -> Self {
        Self::new(field, "Field required", "missing")
    }

    pub fn blank(field: &str) -> Self {
        Self::new(field, "Value must not be blank", "value_error")
    }

    pub fn new(field: &str, msg: impl Into<String>, kind: &str) -> Self {
        let mut loc = vec!["body".to_string()];
        if !field.is_empty() {
            loc.push(field.to_string());
        }
        Self {
            loc,
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0:?}")]
    Validation(Vec<FieldError>),

    #[error("Gemini API did not return expected content.")]
    EmptyContent,

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn field(error: FieldError) -> Self {
        AppError::Validation(vec![error])
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let error = match &rejection {
            JsonRejection::JsonDataError(e) => data_error(&e.body_text()),
            JsonRejection::JsonSyntaxError(e) => {
                FieldError::new("", e.body_text(), "json_invalid")
            }
            JsonRejection::MissingJsonContentType(_) => FieldError::new(
                "",
                "Expected request with `Content-Type: application/json`",
                "content_type",
            ),
            other => FieldError::new("", other.body_text(), "body_error"),
        };
        AppError::field(error)
    }
}

/// Maps a serde data error onto the field it names. Handles both
/// "missing field `resume_text`" and "resume_text: invalid type: ...".
fn data_error(text: &str) -> FieldError {
    if let Some(field) = backticked_after(text, "missing field ") {
        return FieldError::missing(field);
    }
    let detail = text
        .split_once("target type: ")
        .map(|(_, rest)| rest)
        .unwrap_or(text);
    match detail.split_once(": ") {
        Some((path, msg)) if is_field_path(path) => FieldError::new(path, msg, "type_error"),
        _ => FieldError::new("", text, "type_error"),
    }
}

fn is_field_path(path: &str) -> bool {
    !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '[' || c == ']')
}

fn backticked_after<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let rest = &text[text.find(marker)? + marker.len()..];
    let rest = rest.strip_prefix('`')?;
    rest.split('`').next()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Validation(errors) => {
                tracing::debug!("Rejected request: {errors:?}");
                (StatusCode::UNPROCESSABLE_ENTITY, json!(errors))
            }
            AppError::EmptyContent => {
                tracing::error!("Gemini returned no candidates");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!(failure_detail(EMPTY_CONTENT_MESSAGE)),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("Error calling Gemini API: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!(failure_detail(&msg)),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!(failure_detail("internal error")),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

fn failure_detail(reason: &str) -> String {
    format!("Failed to review resume: {reason}")
}
