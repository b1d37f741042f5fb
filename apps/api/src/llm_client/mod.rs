//! LLM Client: the single point of entry for all Gemini API calls.
//!
//! ARCHITECTURAL RULE: No other module may call the Gemini API directly.
//! All LLM interactions MUST go through this module.
//!
//! Model: gemini-2.5-flash (hardcoded, do not make configurable to prevent drift)
use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.5-flash";
const MAX_RETRIES: u32 = 3;
const BACKOFF_BASE: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} attempts")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<&'a GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// Generation options forwarded verbatim as `generationConfig`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    /// Structured JSON output constrained by `schema`.
    pub fn json(schema: Schema) -> Self {
        Self {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schema),
            ..Self::default()
        }
    }
}

/// Subset of the OpenAPI schema object accepted by Gemini's `responseSchema`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub property_ordering: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    String,
    Array,
    Object,
}

impl Schema {
    fn of(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            items: None,
            properties: BTreeMap::new(),
            required: Vec::new(),
            property_ordering: Vec::new(),
        }
    }

    pub fn string() -> Self {
        Self::of(SchemaType::String)
    }

    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of(SchemaType::Array)
        }
    }

    /// An object whose properties are all required and ordered as given.
    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        let mut schema = Self::of(SchemaType::Object);
        for (name, property) in properties {
            let name = name.into();
            schema.required.push(name.clone());
            schema.property_ordering.push(name.clone());
            schema.properties.insert(name, property);
        }
        schema
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Extracts the text of the first part of the first candidate.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// The single LLM client used by all services.
/// Wraps Gemini `generateContent` with retry logic and structured output helpers.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    backoff_base: Duration,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            backoff_base: BACKOFF_BASE,
        })
    }

    #[cfg(test)]
    fn with_backoff_base(mut self, backoff_base: Duration) -> Self {
        self.backoff_base = backoff_base;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, MODEL)
    }

    /// Makes a raw call to Gemini, returning the full response object.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    pub async fn call(
        &self,
        prompt: &str,
        system: &str,
        generation_config: &GenerationConfig,
    ) -> Result<GenerateContentResponse, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: Some("user"),
                parts: vec![RequestPart { text: prompt }],
            }],
            system_instruction: (!system.is_empty()).then(|| RequestContent {
                role: None,
                parts: vec![RequestPart { text: system }],
            }),
            generation_config: Some(generation_config),
        };

        let url = self.endpoint();
        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = backoff_delay(self.backoff_base, attempt);
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Gemini API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: api_error_message(body),
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message: api_error_message(body),
                });
            }

            let llm_response: GenerateContentResponse = response.json().await?;

            if let Some(usage) = &llm_response.usage_metadata {
                debug!(
                    "LLM call succeeded: prompt_tokens={}, candidate_tokens={}",
                    usage.prompt_token_count, usage.candidates_token_count
                );
            }

            return Ok(llm_response);
        }

        Err(match last_error {
            Some(LlmError::Api { status: 429, .. }) | None => LlmError::RateLimited {
                retries: MAX_RETRIES,
            },
            Some(e) => e,
        })
    }

    /// Calls the LLM and deserializes the first candidate's text as JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
        generation_config: &GenerationConfig,
    ) -> Result<T, LlmError> {
        let response = self.call(prompt, system, generation_config).await?;
        parse_json_response(&response)
    }
}

/// Exponential backoff before retry `attempt` (1-based): base, 2 x base, ...
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base * (1 << attempt.saturating_sub(1))
}

/// Pulls the JSON payload out of a Gemini response.
pub fn parse_json_response<T: DeserializeOwned>(
    response: &GenerateContentResponse,
) -> Result<T, LlmError> {
    let Some(text) = response.text() else {
        let finish_reason = response
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            .unwrap_or("NO_CANDIDATES");
        warn!("Gemini returned no text (finish_reason={finish_reason})");
        return Err(LlmError::EmptyContent);
    };

    // Strip markdown code fences if the model wraps JSON in them
    let text = strip_json_fences(text);
    if text.is_empty() {
        return Err(LlmError::EmptyContent);
    }

    serde_json::from_str(text).map_err(LlmError::Parse)
}

/// Gemini error bodies look like `{"error": {"message": ...}}`; fall back to the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<GeminiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(stripped) = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    else {
        return text;
    };
    let stripped = stripped.trim_start();
    stripped
        .strip_suffix("```")
        .map(|s| s.trim())
        .unwrap_or(stripped)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::State,
        http::{HeaderMap, StatusCode, Uri},
        Json, Router,
    };
    use serde_json::json;

    use super::*;

    fn response_from(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_text_reads_first_part_of_first_candidate() {
        let response = response_from(json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}]}, "finishReason": "STOP"},
                {"content": {"parts": [{"text": "other"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 4}
        }));
        assert_eq!(response.text(), Some("first"));
        assert_eq!(response.usage_metadata.unwrap().prompt_token_count, 10);
    }

    #[test]
    fn test_empty_candidates_is_empty_content() {
        let response = response_from(json!({"candidates": []}));
        let result: Result<serde_json::Value, _> = parse_json_response(&response);
        assert!(matches!(result, Err(LlmError::EmptyContent)));
    }

    #[test]
    fn test_candidate_without_parts_is_empty_content() {
        let response = response_from(json!({"candidates": [{"finishReason": "SAFETY"}]}));
        let result: Result<serde_json::Value, _> = parse_json_response(&response);
        assert!(matches!(result, Err(LlmError::EmptyContent)));
    }

    #[test]
    fn test_invalid_json_text_is_parse_error() {
        let response = response_from(json!({
            "candidates": [{"content": {"parts": [{"text": "not json"}]}}]
        }));
        let result: Result<serde_json::Value, _> = parse_json_response(&response);
        assert!(matches!(result, Err(LlmError::Parse(_))));
    }

    #[test]
    fn test_api_error_message_prefers_gemini_body() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(api_error_message(body.to_string()), "API key not valid");
        assert_eq!(api_error_message("plain".to_string()), "plain");
    }

    #[test]
    fn test_request_serializes_gemini_field_names() {
        let config = GenerationConfig::json(Schema::object([("review", Schema::string())]));
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                role: Some("user"),
                parts: vec![RequestPart { text: "hi" }],
            }],
            system_instruction: None,
            generation_config: Some(&config),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
        assert!(value.get("systemInstruction").is_none());
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            value["generationConfig"]["responseSchema"]["type"],
            "OBJECT"
        );
        assert_eq!(
            value["generationConfig"]["responseSchema"]["properties"]["review"]["type"],
            "STRING"
        );
    }

    #[test]
    fn test_endpoint_uses_hardcoded_model() {
        let client = GeminiClient::new(
            "key".to_string(),
            "http://localhost:1234/v1beta/".to_string(),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:1234/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_backoff_doubles_from_one_second() {
        assert_eq!(backoff_delay(BACKOFF_BASE, 1), Duration::from_secs(1));
        assert_eq!(backoff_delay(BACKOFF_BASE, 2), Duration::from_secs(2));
    }

    // ── Outbound path against a local stand-in for the Gemini endpoint ──

    #[derive(Default)]
    struct FakeGemini {
        replies: Mutex<VecDeque<(StatusCode, serde_json::Value)>>,
        seen: Mutex<Vec<(String, Option<String>)>>,
    }

    async fn fake_generate(
        State(fake): State<Arc<FakeGemini>>,
        uri: Uri,
        headers: HeaderMap,
    ) -> (StatusCode, Json<serde_json::Value>) {
        let api_key = headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        fake.seen.lock().unwrap().push((uri.path().to_string(), api_key));
        let (status, body) = fake
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((StatusCode::INTERNAL_SERVER_ERROR, json!({})));
        (status, Json(body))
    }

    async fn start_fake(replies: Vec<(StatusCode, serde_json::Value)>) -> (GeminiClient, Arc<FakeGemini>) {
        let fake = Arc::new(FakeGemini {
            replies: Mutex::new(replies.into()),
            ..FakeGemini::default()
        });
        let app = Router::new()
            .fallback(fake_generate)
            .with_state(fake.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = GeminiClient::new(
            "test-key".to_string(),
            format!("http://{addr}/v1beta"),
            Duration::from_secs(10),
        )
        .unwrap()
        .with_backoff_base(Duration::from_millis(1));
        (client, fake)
    }

    fn review_reply() -> serde_json::Value {
        json!({
            "candidates": [{"content": {"parts": [{"text": "{\"review\": \"ok\"}"}]}}]
        })
    }

    #[tokio::test]
    async fn test_call_retries_server_error_then_succeeds() {
        let (client, fake) = start_fake(vec![
            (StatusCode::SERVICE_UNAVAILABLE, json!({"error": {"message": "overloaded"}})),
            (StatusCode::OK, review_reply()),
        ])
        .await;

        let value: serde_json::Value = client
            .call_json("prompt", "system", &GenerationConfig::default())
            .await
            .unwrap();
        assert_eq!(value["review"], "ok");

        let seen = fake.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, "/v1beta/models/gemini-2.5-flash:generateContent");
        assert!(seen.iter().all(|(_, key)| key.as_deref() == Some("test-key")));
    }

    #[tokio::test]
    async fn test_call_gives_up_after_three_server_errors() {
        let (client, fake) = start_fake(vec![
            (StatusCode::INTERNAL_SERVER_ERROR, json!({"error": {"message": "boom 1"}})),
            (StatusCode::BAD_GATEWAY, json!({"error": {"message": "boom 2"}})),
            (StatusCode::SERVICE_UNAVAILABLE, json!({"error": {"message": "boom 3"}})),
            (StatusCode::OK, review_reply()),
        ])
        .await;

        let err = client
            .call("prompt", "", &GenerationConfig::default())
            .await
            .unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "boom 3");
            }
            other => panic!("expected API error, got {other:?}"),
        }
        assert_eq!(fake.seen.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_call_does_not_retry_client_error() {
        let (client, fake) = start_fake(vec![
            (
                StatusCode::BAD_REQUEST,
                json!({"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}),
            ),
            (StatusCode::OK, review_reply()),
        ])
        .await;

        let err = client
            .call("prompt", "", &GenerationConfig::default())
            .await
            .unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("expected API error, got {other:?}"),
        }
        assert_eq!(fake.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_call_reports_rate_limit_after_repeated_429() {
        let too_many = || (StatusCode::TOO_MANY_REQUESTS, json!({"error": {"message": "quota"}}));
        let (client, fake) = start_fake(vec![too_many(), too_many(), too_many()]).await;

        let err = client
            .call("prompt", "", &GenerationConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::RateLimited { retries: 3 }));
        assert_eq!(fake.seen.lock().unwrap().len(), 3);
    }
}
