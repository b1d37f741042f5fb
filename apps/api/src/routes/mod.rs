pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::review::handlers;
use crate::state::AppState;

/// Headroom for the job description and multipart framing on top of the resume file.
const UPLOAD_OVERHEAD_BYTES: usize = 256 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_resume_bytes + UPLOAD_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/review_resume", post(handlers::handle_review_resume))
        .route(
            "/review_resume/upload",
            post(handlers::handle_review_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}
