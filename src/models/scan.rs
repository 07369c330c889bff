use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

pub const UNSAFE_RISK_SCORE: u8 = 90;
pub const SAFE_RISK_SCORE: u8 = 10;

/// Categories every lookup is filtered by.
pub const THREAT_TYPES: [&str; 4] = [
    "MALWARE",
    "SOCIAL_ENGINEERING",
    "POTENTIALLY_HARMFUL_APPLICATION",
    "UNWANTED_SOFTWARE",
];

/// A URL that is allowed to be scanned: non-empty and starting with `http`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanTarget(String);

impl ScanTarget {
    pub fn parse(url: Option<String>) -> Result<Self, AppError> {
        match url {
            Some(url) if url.starts_with("http") => Ok(Self(url)),
            _ => Err(AppError::BadRequest("Valid URL is required".into())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThreatEntry {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThreatMatch {
    pub threat_type: String,
    pub platform_type: Option<String>,
    pub threat: Option<ThreatEntry>,
}

#[derive(Debug, Deserialize)]
struct LookupBody {
    #[serde(default)]
    matches: Vec<ThreatMatch>,
}

/// Outcome of a threat lookup. `raw` is the service body as received and is
/// passed through to callers untouched.
#[derive(Debug, Clone)]
pub struct ThreatLookup {
    pub matches: Vec<ThreatMatch>,
    pub raw: Value,
}

impl ThreatLookup {
    pub fn from_response(raw: Value) -> Result<Self, AppError> {
        let body: LookupBody = serde_json::from_value(raw.clone()).map_err(|e| {
            AppError::ThreatIntel(format!("Malformed threat lookup response: {}", e))
        })?;

        Ok(Self {
            matches: body.matches,
            raw,
        })
    }

    pub fn is_flagged(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn risk_score(&self) -> u8 {
        if self.is_flagged() {
            UNSAFE_RISK_SCORE
        } else {
            SAFE_RISK_SCORE
        }
    }

    pub fn explanation(&self) -> String {
        if !self.is_flagged() {
            return "No threats found".to_string();
        }

        let kinds = self
            .matches
            .iter()
            .map(|m| m.threat_type.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Flagged as: {}", kinds)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub url: String,
    pub risk_score: u8,
    pub explanation: String,
    pub ai_analysis: String,
    pub details: Value,
}

impl ScanResult {
    pub fn merge(target: ScanTarget, lookup: ThreatLookup, ai_analysis: String) -> Self {
        Self {
            url: target.into_inner(),
            risk_score: lookup.risk_score(),
            explanation: lookup.explanation(),
            ai_analysis,
            details: lookup.raw,
        }
    }
}
