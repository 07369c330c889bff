pub mod client;
pub mod config;
pub mod db;
pub mod errors;
pub mod external;
mod extract;
pub mod http;
mod middleware;
pub mod models;
pub mod services;
pub mod state;

use axum::Router;
use config::Config;
use db::{MemoryFeedbackStore, PgFeedbackStore};
use errors::AppError;
use external::{GeminiClient, SafeBrowsingClient};
use middleware::{cors_layer, trace_layer};
use state::AppState;

/// The full router: routes, CORS, request tracing and a plain 404 fallback.
pub fn build_app(state: AppState, allowed_origins: Option<&[String]>) -> Result<Router, AppError> {
    Ok(Router::new()
        .merge(http::create_http_routes(state))
        .layer(cors_layer(allowed_origins)?)
        .layer(trace_layer())
        .fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "404 Not Found") }))
}

pub async fn build_state(config: &Config) -> Result<AppState, AppError> {
    let http = reqwest::Client::builder()
        .build()
        .map_err(|e| AppError::EnvError(format!("Failed to build HTTP client: {}", e)))?;

    let threat_intel = SafeBrowsingClient::new(
        http.clone(),
        config.safe_browsing_api_key.clone(),
        config.safe_browsing_base_url.clone(),
    );
    let ai = GeminiClient::new(
        http,
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.gemini_base_url.clone(),
    );

    let state = match &config.database_url {
        Some(database_url) => {
            let postgres = db::connect(database_url).await?;
            AppState::new(PgFeedbackStore::new(postgres), threat_intel, ai)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, feedback is kept in memory only");
            AppState::new(MemoryFeedbackStore::new(), threat_intel, ai)
        }
    };

    Ok(state)
}

pub async fn start_server() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let state = build_state(&config).await?;
    let app = build_app(state, config.allowed_origins.as_deref())?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(|e| AppError::EnvError(format!("Failed to bind port {}: {}", config.port, e)))?;

    tracing::info!("Safe WebTrust server running on port {}", config.port);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::EnvError(format!("Server error: {}", e)))?;

    Ok(())
}
