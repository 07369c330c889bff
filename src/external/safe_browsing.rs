use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use super::ThreatIntel;
use crate::{
    errors::AppError,
    models::{ThreatLookup, scan::THREAT_TYPES},
};

const CLIENT_ID: &str = "safe-webtrust";
const CLIENT_VERSION: &str = "1.0";

/// Google Safe Browsing v4 `threatMatches:find`.
pub struct SafeBrowsingClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl SafeBrowsingClient {
    pub fn new(http: Client, api_key: String, base_url: String) -> Self {
        Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FindRequest<'a> {
    client: ClientInfo<'a>,
    threat_info: ThreatInfo<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientInfo<'a> {
    client_id: &'a str,
    client_version: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThreatInfo<'a> {
    threat_types: &'a [&'a str],
    platform_types: [&'a str; 1],
    threat_entry_types: [&'a str; 1],
    threat_entries: [Entry<'a>; 1],
}

#[derive(Serialize)]
struct Entry<'a> {
    url: &'a str,
}

#[async_trait]
impl ThreatIntel for SafeBrowsingClient {
    async fn lookup(&self, url: &str) -> Result<ThreatLookup, AppError> {
        let body = FindRequest {
            client: ClientInfo {
                client_id: CLIENT_ID,
                client_version: CLIENT_VERSION,
            },
            threat_info: ThreatInfo {
                threat_types: &THREAT_TYPES,
                platform_types: ["ANY_PLATFORM"],
                threat_entry_types: ["URL"],
                threat_entries: [Entry { url }],
            },
        };

        let endpoint = format!("{}/v4/threatMatches:find", self.base_url);
        let res = self
            .http
            .post(&endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ThreatIntel(format!("Failed to reach Safe Browsing: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(AppError::ThreatIntel(format!(
                "Safe Browsing returned {}: {}",
                status, text
            )));
        }

        let raw: Value = res.json().await.map_err(|e| {
            AppError::ThreatIntel(format!("Invalid Safe Browsing JSON response: {}", e))
        })?;

        let lookup = ThreatLookup::from_response(raw)?;
        tracing::debug!(
            "Safe Browsing lookup for {} returned {} match(es)",
            url,
            lookup.matches.len()
        );
        Ok(lookup)
    }
}
