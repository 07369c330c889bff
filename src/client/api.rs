use reqwest::{Client, Response};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::json;
use thiserror::Error;

use crate::models::{ChatReply, FeedbackStatus, ScanResult, TrustScore};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Typed client for the backend, shared by the popup and the background
/// relay.
#[derive(Clone)]
pub struct WebTrustClient {
    http: Client,
    base_url: String,
}

impl Default for WebTrustClient {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl WebTrustClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn scan(&self, url: &str) -> Result<ScanResult, ClientError> {
        let res = self
            .http
            .post(format!("{}/scan", self.base_url))
            .json(&json!({ "url": url }))
            .send()
            .await?;
        read_json(res).await
    }

    pub async fn trust_score(&self, url: &str) -> Result<TrustScore, ClientError> {
        let res = self
            .http
            .get(format!("{}/trust-score", self.base_url))
            .query(&[("url", url)])
            .send()
            .await?;
        read_json(res).await
    }

    pub async fn submit_feedback(
        &self,
        url: &str,
        rating: i32,
        comment: Option<&str>,
    ) -> Result<FeedbackStatus, ClientError> {
        let res = self
            .http
            .post(format!("{}/feedback", self.base_url))
            .json(&json!({ "url": url, "rating": rating, "comment": comment }))
            .send()
            .await?;
        read_json(res).await
    }

    pub async fn ask(&self, message: &str, url: Option<&str>) -> Result<ChatReply, ClientError> {
        let res = self
            .http
            .post(format!("{}/scamgpt", self.base_url))
            .json(&json!({ "message": message, "url": url }))
            .send()
            .await?;
        read_json(res).await
    }
}

async fn read_json<T: DeserializeOwned>(res: Response) -> Result<T, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res.json().await?);
    }

    let text = res.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
