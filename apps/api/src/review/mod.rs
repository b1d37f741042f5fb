// Resume review: request validation, prompt + response schema, the reviewer backend,
// upload text extraction and the HTTP handlers.
// All LLM calls go through llm_client; no direct Gemini calls here.

pub mod extract;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod reviewer;
