use std::sync::Arc;

use crate::{
    db::FeedbackStore,
    external::{TextGenerator, ThreatIntel},
};

/// Handles built once at startup and shared by every route.
#[derive(Clone)]
pub struct AppState {
    pub feedback: FeedbackHandle,
    pub threat_intel: ThreatIntelHandle,
    pub ai: TextGeneratorHandle,
}

impl AppState {
    pub fn new(
        feedback: impl FeedbackStore + 'static,
        threat_intel: impl ThreatIntel + 'static,
        ai: impl TextGenerator + 'static,
    ) -> Self {
        Self {
            feedback: Arc::new(feedback),
            threat_intel: Arc::new(threat_intel),
            ai: Arc::new(ai),
        }
    }
}

pub type FeedbackHandle = Arc<dyn FeedbackStore>;

pub type ThreatIntelHandle = Arc<dyn ThreatIntel>;

pub type TextGeneratorHandle = Arc<dyn TextGenerator>;
