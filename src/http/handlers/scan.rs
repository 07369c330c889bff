use axum::{Json, extract::State};
use serde::Deserialize;

use crate::{
    errors::AppError,
    extract::JsonBody,
    models::{ScanResult, ScanTarget},
    services::scan_url,
    state::AppState,
};

#[derive(Deserialize)]
pub struct ScanPayload {
    pub url: Option<String>,
}

#[axum::debug_handler]
pub async fn scan_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ScanPayload>,
) -> Result<Json<ScanResult>, AppError> {
    let target = ScanTarget::parse(payload.url)?;

    let result = scan_url(target, state.threat_intel.as_ref(), state.ai.as_ref())
        .await
        .map_err(|e| e.masked("/scan", "Failed to check URL with Safe Browsing/Gemini"))?;

    Ok(Json(result))
}
