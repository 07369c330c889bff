use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::FeedbackStore;
use crate::{
    errors::AppError,
    models::{FeedbackRecord, NewFeedback},
};

/// Process-local collection used when no database is configured.
/// Contents are lost on restart.
#[derive(Clone, Default)]
pub struct MemoryFeedbackStore {
    records: Arc<RwLock<Vec<FeedbackRecord>>>,
}

impl MemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl FeedbackStore for MemoryFeedbackStore {
    async fn insert(&self, feedback: NewFeedback) -> Result<FeedbackRecord, AppError> {
        let now = Utc::now();
        let record = FeedbackRecord {
            id: Uuid::new_v4(),
            url: feedback.url,
            rating: feedback.rating,
            comment: feedback.comment,
            created_at: now,
            updated_at: now,
        };

        self.records.write().await.push(record.clone());
        tracing::debug!("Stored in-memory feedback {} for {}", record.id, record.url);
        Ok(record)
    }

    async fn find_by_url(&self, url: &str) -> Result<Vec<FeedbackRecord>, AppError> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|r| r.url == url).cloned().collect())
    }
}
