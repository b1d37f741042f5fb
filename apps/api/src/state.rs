use std::sync::Arc;

use crate::config::Config;
use crate::review::reviewer::ResumeReviewer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable review backend. Default: GeminiReviewer.
    pub reviewer: Arc<dyn ResumeReviewer>,
}
