use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        feedback_handler, health_handler, scamgpt_handler, scan_handler, trust_score_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/scan", post(scan_handler))
        .route("/feedback", post(feedback_handler))
        .route("/trust-score", get(trust_score_handler))
        .route("/scamgpt", post(scamgpt_handler))
        .with_state(state)
}
