use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Threat intelligence error: {0}")]
    ThreatIntel(String),

    #[error("AI completion error: {0}")]
    Ai(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Env error: {0}")]
    EnvError(String),

    #[error("Upstream failure: {0}")]
    Upstream(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response(&self) -> (StatusCode, String) {
        match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::ThreatIntel(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::Ai(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::DatabaseError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::EnvError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        }
    }

    /// Logs the underlying cause and swaps server-side failures for a
    /// message that is safe to hand back to the caller. Client errors pass
    /// through untouched.
    pub fn masked(self, route: &str, public_message: &str) -> AppError {
        if self.status().is_client_error() {
            return self;
        }
        tracing::error!("Error in {}: {}", route, self);
        AppError::Upstream(public_message.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.to_response();
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_is_not_masked() {
        let err = AppError::BadRequest("Valid URL is required".into()).masked("/scan", "nope");
        assert_eq!(
            err.to_response(),
            (StatusCode::BAD_REQUEST, "Valid URL is required".to_string())
        );
    }

    #[test]
    fn upstream_cause_is_hidden() {
        let err = AppError::ThreatIntel("403 API key invalid".into()).masked("/scan", "Failed");
        let (status, msg) = err.to_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(msg, "Failed");
    }
}
