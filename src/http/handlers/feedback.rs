use axum::{
    Json,
    extract::State,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    errors::AppError,
    extract::{JsonBody, QueryParams},
    models::{FeedbackStatus, NewFeedback, TrustScore},
    services::{get_trust_score, submit_feedback},
    state::AppState,
};

#[derive(Deserialize)]
pub struct FeedbackPayload {
    pub url: Option<String>,
    pub rating: Option<Value>,
    pub comment: Option<String>,
}

pub async fn feedback_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<FeedbackPayload>,
) -> Result<Json<FeedbackStatus>, AppError> {
    let feedback = NewFeedback::parse(payload.url, payload.rating.as_ref(), payload.comment)?;

    submit_feedback(feedback, state.feedback.as_ref())
        .await
        .map_err(|e| e.masked("/feedback", "Server error"))?;

    Ok(Json(FeedbackStatus::success()))
}

#[derive(Deserialize)]
pub struct TrustScoreParams {
    pub url: Option<String>,
}

pub async fn trust_score_handler(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<TrustScoreParams>,
) -> Result<Json<TrustScore>, AppError> {
    let url = params
        .url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::BadRequest("URL query parameter required".into()))?;

    let score = get_trust_score(&url, state.feedback.as_ref())
        .await
        .map_err(|e| e.masked("/trust-score", "Server error"))?;

    Ok(Json(score))
}
