pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume handles
        .route("/resumes", post(resumes::handle_upload))
        .route("/resumes/:handle", get(resumes::handle_get_resume))
        .route("/resumes/:handle/name", post(resumes::handle_name))
        .route("/resumes/:handle/skills", post(resumes::handle_skills))
        .route(
            "/resumes/:handle/certifications",
            post(resumes::handle_certifications),
        )
        // Matching
        .route("/match", post(analysis::handle_match))
        .route("/analyze", post(analysis::handle_analyze))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
