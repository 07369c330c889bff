use axum::{Json, extract::State};
use serde::Deserialize;

use crate::{
    errors::AppError,
    extract::JsonBody,
    models::{ChatQuery, ChatReply},
    services::ask_scamgpt,
    state::AppState,
};

#[derive(Deserialize)]
pub struct ScamGptPayload {
    pub message: Option<String>,
    pub url: Option<String>,
}

pub async fn scamgpt_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ScamGptPayload>,
) -> Result<Json<ChatReply>, AppError> {
    let query = ChatQuery::parse(payload.message, payload.url)?;

    let reply = ask_scamgpt(query, state.ai.as_ref())
        .await
        .map_err(|e| e.masked("/scamgpt", "Gemini AI response failed"))?;

    Ok(Json(reply))
}
