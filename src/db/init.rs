use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::errors::AppError;

const MAX_CONNECTIONS: u32 = 10;

pub async fn connect(database_url: &str) -> Result<PgPool, AppError> {
    let postgres = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to connect to Postgres: {}", e)))?;

    ensure_schema(&postgres).await?;
    tracing::info!("Postgres connected");

    Ok(postgres)
}

/// Creates the feedback collection on first start.
pub async fn ensure_schema(postgres: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS feedback (
			id UUID PRIMARY KEY,
			url TEXT NOT NULL,
			rating INTEGER NOT NULL,
			comment TEXT,
			created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
			updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
		)",
    )
    .execute(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create feedback table: {}", e)))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS feedback_url_idx ON feedback (url)")
        .execute(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to create feedback index: {}", e)))?;

    Ok(())
}
