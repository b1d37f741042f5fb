use std::fmt;

use anyhow::{Context, Result};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if a numeric variable does not parse.
#[derive(Clone)]
pub struct Config {
    /// Empty when not injected; Gemini will then reject calls with 4xx.
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub llm_timeout_secs: u64,
    pub max_resume_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.has_api_key() { "[redacted]" } else { "[unset]" };
        f.debug_struct("Config")
            .field("gemini_api_key", &api_key)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("llm_timeout_secs", &self.llm_timeout_secs)
            .field("max_resume_bytes", &self.max_resume_bytes)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            llm_timeout_secs: 120,
            max_resume_bytes: DEFAULT_MAX_RESUME_BYTES,
            port: 8000,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            gemini_api_key: lookup("GEMINI_API_KEY").unwrap_or_default(),
            gemini_base_url: lookup("GEMINI_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.gemini_base_url),
            llm_timeout_secs: parse_or(&lookup, "LLM_TIMEOUT_SECS", defaults.llm_timeout_secs)?,
            max_resume_bytes: parse_or(&lookup, "MAX_RESUME_BYTES", defaults.max_resume_bytes)?,
            port: parse_or(&lookup, "PORT", defaults.port)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }

    pub fn has_api_key(&self) -> bool {
        !self.gemini_api_key.trim().is_empty()
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
