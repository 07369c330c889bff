use axum::http::{HeaderValue, Method, header};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{HttpMakeClassifier, TraceLayer},
};

use crate::errors::AppError;

// The extension calls in from a chrome-extension:// origin, so with no
// explicit list every origin is let through.
pub fn cors_layer(allowed_origins: Option<&[String]>) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    let Some(origins) = allowed_origins else {
        tracing::info!("CORS allowed origins: any");
        return Ok(layer.allow_origin(Any));
    };

    let origins = origins
        .iter()
        .map(|s| {
            s.parse::<HeaderValue>()
                .map_err(|e| AppError::EnvError(format!("Invalid origin '{}': {}", s, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!("CORS allowed origins: {:?}", origins);

    Ok(layer.allow_origin(origins))
}

pub fn trace_layer() -> TraceLayer<HttpMakeClassifier> {
    TraceLayer::new_for_http()
}
