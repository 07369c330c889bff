use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{FeedbackRecord, NewFeedback},
};

pub async fn insert_feedback(
    feedback: NewFeedback,
    postgres: &PgPool,
) -> Result<FeedbackRecord, AppError> {
    let record = sqlx::query_as::<_, FeedbackRecord>(
        "INSERT INTO feedback (id, url, rating, comment)
        VALUES ($1, $2, $3, $4)
        RETURNING id, url, rating, comment, created_at, updated_at",
    )
    .bind(Uuid::new_v4())
    .bind(&feedback.url)
    .bind(feedback.rating)
    .bind(&feedback.comment)
    .fetch_one(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to insert feedback: {}", e)))?;

    tracing::info!(
        "Stored feedback {} for {} (rating {})",
        record.id,
        record.url,
        record.rating
    );

    Ok(record)
}
