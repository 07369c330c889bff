use async_trait::async_trait;

use crate::{errors::AppError, models::ThreatLookup};

mod gemini;
mod safe_browsing;

pub use gemini::GeminiClient;
pub use safe_browsing::SafeBrowsingClient;

/// Known-malicious URL lookup.
#[async_trait]
pub trait ThreatIntel: Send + Sync {
    async fn lookup(&self, url: &str) -> Result<ThreatLookup, AppError>;
}

/// Single-shot prompt completion. Implementations return the model's text
/// verbatim and treat an empty completion as a failure.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}
