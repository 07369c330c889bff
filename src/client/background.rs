//! Relay between the page-injected script and the backend.
//!
//! The content script cannot reach the backend directly, so it posts a
//! `scanSite` message and the privileged background side answers later on
//! the same channel with exactly one [`BackgroundReply`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::api::WebTrustClient;
use crate::models::ScanResult;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BackgroundMessage {
    ScanSite { url: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "WireReply", try_from = "WireReply")]
pub enum BackgroundReply {
    Scanned(ScanResult),
    Failed(String),
}

impl BackgroundReply {
    pub fn into_result(self) -> Result<ScanResult, String> {
        match self {
            BackgroundReply::Scanned(result) => Ok(result),
            BackgroundReply::Failed(error) => Err(error),
        }
    }
}

// `{success: true, data}` / `{success: false, error}` on the wire.
#[derive(Serialize, Deserialize)]
struct WireReply {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<ScanResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<BackgroundReply> for WireReply {
    fn from(reply: BackgroundReply) -> Self {
        match reply {
            BackgroundReply::Scanned(data) => WireReply {
                success: true,
                data: Some(data),
                error: None,
            },
            BackgroundReply::Failed(error) => WireReply {
                success: false,
                data: None,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<WireReply> for BackgroundReply {
    type Error = String;

    fn try_from(wire: WireReply) -> Result<Self, Self::Error> {
        match (wire.success, wire.data) {
            (true, Some(data)) => Ok(BackgroundReply::Scanned(data)),
            (true, None) => Err("successful reply without data".into()),
            (false, _) => Ok(BackgroundReply::Failed(
                wire.error.unwrap_or_else(|| "Unknown error".into()),
            )),
        }
    }
}

#[derive(Clone, Default)]
pub struct Background {
    client: WebTrustClient,
}

impl Background {
    pub fn new(client: WebTrustClient) -> Self {
        Self { client }
    }

    pub async fn handle(&self, message: BackgroundMessage) -> BackgroundReply {
        match message {
            BackgroundMessage::ScanSite { url } => match self.client.scan(&url).await {
                Ok(result) => BackgroundReply::Scanned(result),
                Err(e) => {
                    tracing::warn!("Background scan of {} failed: {}", url, e);
                    BackgroundReply::Failed(e.to_string())
                }
            },
        }
    }

    /// Messages this relay does not understand get no reply at all, leaving
    /// them to other listeners.
    pub async fn handle_raw(&self, raw: Value) -> Option<BackgroundReply> {
        let message = serde_json::from_value::<BackgroundMessage>(raw).ok()?;
        Some(self.handle(message).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_result() -> ScanResult {
        ScanResult {
            url: "http://a.com".into(),
            risk_score: 10,
            explanation: "No threats found".into(),
            ai_analysis: "fine".into(),
            details: json!({}),
        }
    }

    #[test]
    fn scan_site_message_wire_shape() {
        let msg: BackgroundMessage =
            serde_json::from_value(json!({ "type": "scanSite", "url": "http://a.com" })).unwrap();
        assert_eq!(
            msg,
            BackgroundMessage::ScanSite {
                url: "http://a.com".into()
            }
        );
        assert!(serde_json::from_value::<BackgroundMessage>(json!({ "type": "other" })).is_err());
    }

    #[test]
    fn replies_use_success_envelope() {
        let ok = serde_json::to_value(BackgroundReply::Scanned(sample_result())).unwrap();
        assert_eq!(ok["success"], true);
        assert_eq!(ok["data"]["riskScore"], 10);
        assert!(ok.get("error").is_none());

        let failed = serde_json::to_value(BackgroundReply::Failed("offline".into())).unwrap();
        assert_eq!(failed, json!({ "success": false, "error": "offline" }));
    }

    #[test]
    fn success_without_data_does_not_parse() {
        assert!(serde_json::from_value::<BackgroundReply>(json!({ "success": true })).is_err());
        let failed: BackgroundReply = serde_json::from_value(json!({ "success": false })).unwrap();
        assert_eq!(failed.into_result().unwrap_err(), "Unknown error");
    }
}
