use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::{FeedbackRecord, NewFeedback},
};

pub mod get;
mod memory;
pub mod post;

pub use memory::MemoryFeedbackStore;

/// The single feedback collection. Writes only ever append.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn insert(&self, feedback: NewFeedback) -> Result<FeedbackRecord, AppError>;

    /// Every record whose `url` equals `url` byte for byte.
    async fn find_by_url(&self, url: &str) -> Result<Vec<FeedbackRecord>, AppError>;
}

#[derive(Clone)]
pub struct PgFeedbackStore {
    postgres: PgPool,
}

impl PgFeedbackStore {
    pub fn new(postgres: PgPool) -> Self {
        Self { postgres }
    }
}

#[async_trait]
impl FeedbackStore for PgFeedbackStore {
    async fn insert(&self, feedback: NewFeedback) -> Result<FeedbackRecord, AppError> {
        post::insert_feedback(feedback, &self.postgres).await
    }

    async fn find_by_url(&self, url: &str) -> Result<Vec<FeedbackRecord>, AppError> {
        get::get_feedback_by_url(url, &self.postgres).await
    }
}
