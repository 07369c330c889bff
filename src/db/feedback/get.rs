use sqlx::PgPool;

use crate::{errors::AppError, models::FeedbackRecord};

pub async fn get_feedback_by_url(
    url: &str,
    postgres: &PgPool,
) -> Result<Vec<FeedbackRecord>, AppError> {
    let records = sqlx::query_as::<_, FeedbackRecord>(
        "SELECT id, url, rating, comment, created_at, updated_at
			FROM feedback
			WHERE url = $1
			ORDER BY created_at ASC",
    )
    .bind(url)
    .fetch_all(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch feedback: {}", e)))?;

    Ok(records)
}
