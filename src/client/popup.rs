//! State behind the four popup panels. Nothing here is persisted; closing
//! the popup drops it all.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{
    api::{ClientError, WebTrustClient},
    badge::RiskBand,
};
use crate::models::{ChatReply, FeedbackStatus, ScanResult, TrustScore};

#[derive(Debug, Clone, PartialEq)]
pub enum PanelState<T> {
    Idle,
    Loading,
    Loaded(T),
    Error,
}

impl<T> PanelState<T> {
    pub fn from_result<E: Display>(panel: &str, result: Result<T, E>) -> Self {
        match result {
            Ok(value) => PanelState::Loaded(value),
            Err(e) => {
                tracing::warn!("{} panel failed to load: {}", panel, e);
                PanelState::Error
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PanelState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            PanelState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Score headline and verdict for the scan panel.
pub fn scan_summary(state: &PanelState<ScanResult>) -> (String, String) {
    match state {
        PanelState::Idle => ("--".into(), String::new()),
        PanelState::Loading => ("Scanning...".into(), String::new()),
        PanelState::Error => ("Error loading scan".into(), "Error fetching AI analysis.".into()),
        PanelState::Loaded(result) => (
            format!(
                "{} {}",
                result.risk_score,
                RiskBand::from_score(result.risk_score).verdict()
            ),
            result.ai_analysis.clone(),
        ),
    }
}

/// Average to two decimals (or "No feedback") over five, plus the count.
pub fn trust_summary(state: &PanelState<TrustScore>) -> String {
    match state {
        PanelState::Idle | PanelState::Loading => "...".into(),
        PanelState::Error => "Error".into(),
        PanelState::Loaded(score) => {
            let plural = if score.feedback_count == 1 { "" } else { "s" };
            let average = match score.average_rating {
                Some(avg) => format!("{:.2}", avg),
                None => "No feedback".into(),
            };
            format!("{} / 5 ({} feedback{})", average, score.feedback_count, plural)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub sender: Sender,
    pub text: String,
}

/// Append-only, in the order messages were sent and received.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatTranscript {
    entries: Vec<ChatEntry>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    /// Returns the trimmed text that was recorded, or `None` for blank input.
    pub fn push_user(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        self.entries.push(ChatEntry {
            sender: Sender::User,
            text: text.to_string(),
        });
        Some(text.to_string())
    }

    pub fn push_bot(&mut self, reply: Result<ChatReply, ClientError>) {
        let text = match reply {
            Ok(ChatReply { reply }) if !reply.is_empty() => reply,
            Ok(_) => "No response.".into(),
            Err(e) => {
                tracing::warn!("ScamGPT request failed: {}", e);
                "Error contacting ScamGPT.".into()
            }
        };
        self.entries.push(ChatEntry {
            sender: Sender::Bot,
            text,
        });
    }
}

pub const FEEDBACK_NEEDS_RATING: &str = "Please select a rating.";
pub const FEEDBACK_THANKS: &str = "Thanks for your feedback!";
pub const FEEDBACK_REJECTED: &str = "Failed to submit feedback.";
pub const FEEDBACK_ERROR: &str = "Error submitting feedback.";

pub struct Popup {
    client: WebTrustClient,
    url: String,
    pub scan: PanelState<ScanResult>,
    pub trust: PanelState<TrustScore>,
    pub feedback_status: Option<&'static str>,
    pub transcript: ChatTranscript,
    pub chat_loading: bool,
}

impl Popup {
    pub fn new(client: WebTrustClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            scan: PanelState::Idle,
            trust: PanelState::Idle,
            feedback_status: None,
            transcript: ChatTranscript::new(),
            chat_loading: false,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Loads the trust and scan panels for the active tab. They are fetched
    /// independently; one failing leaves the other intact.
    pub async fn open(&mut self) {
        self.scan = PanelState::Loading;
        self.trust = PanelState::Loading;

        let (trust, scan) = tokio::join!(
            self.client.trust_score(&self.url),
            self.client.scan(&self.url)
        );

        self.trust = PanelState::from_result("trust", trust);
        self.scan = PanelState::from_result("scan", scan);
    }

    pub async fn refresh_trust(&mut self) {
        self.trust = PanelState::Loading;
        let trust = self.client.trust_score(&self.url).await;
        self.trust = PanelState::from_result("trust", trust);
    }

    pub async fn submit_feedback(&mut self, rating: Option<i32>, comment: &str) {
        self.feedback_status = None;
        let Some(rating) = rating else {
            self.feedback_status = Some(FEEDBACK_NEEDS_RATING);
            return;
        };

        let comment = (!comment.trim().is_empty()).then_some(comment);
        let status = match self.client.submit_feedback(&self.url, rating, comment).await {
            Ok(status) if status.is_success() => FEEDBACK_THANKS,
            Ok(FeedbackStatus { status }) => {
                tracing::warn!("Unexpected feedback status: {}", status);
                FEEDBACK_REJECTED
            }
            Err(ClientError::Api { status, message }) => {
                tracing::warn!("Feedback rejected ({}): {}", status, message);
                FEEDBACK_REJECTED
            }
            Err(e) => {
                tracing::warn!("Feedback request failed: {}", e);
                FEEDBACK_ERROR
            }
        };
        self.feedback_status = Some(status);

        if status == FEEDBACK_THANKS {
            self.refresh_trust().await;
        }
    }

    /// Only the current message and page URL are sent; earlier turns stay
    /// in the transcript.
    pub async fn send_chat(&mut self, input: &str) {
        let Some(message) = self.transcript.push_user(input) else {
            return;
        };

        self.chat_loading = true;
        let reply = self.client.ask(&message, Some(self.url.as_str())).await;
        self.transcript.push_bot(reply);
        self.chat_loading = false;
    }
}
