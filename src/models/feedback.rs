use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

#[derive(Debug, Clone, FromRow)]
pub struct FeedbackRecord {
    pub id: Uuid,
    pub url: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A rating that passed boundary validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFeedback {
    pub url: String,
    pub rating: i32,
    pub comment: Option<String>,
}

impl NewFeedback {
    /// `rating` is taken as raw JSON so that a quoted number such as `"5"`
    /// is refused instead of coerced.
    pub fn parse(
        url: Option<String>,
        rating: Option<&Value>,
        comment: Option<String>,
    ) -> Result<Self, AppError> {
        let url = url.filter(|u| !u.is_empty());
        let (Some(url), Some(Value::Number(rating))) = (url, rating) else {
            return Err(AppError::BadRequest(
                "URL and numeric rating required".into(),
            ));
        };

        // `4` and `4.0` are the same rating; `4.5` is not a rating at all.
        let allowed = (MIN_RATING as f64)..=(MAX_RATING as f64);
        let rating = rating
            .as_f64()
            .filter(|r| r.fract() == 0.0 && allowed.contains(r))
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Rating must be a whole number between {} and {}",
                    MIN_RATING, MAX_RATING
                ))
            })?;

        Ok(Self {
            url,
            rating: rating as i32,
            comment: comment.filter(|c| !c.trim().is_empty()),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackStatus {
    pub status: String,
}

impl FeedbackStatus {
    pub fn success() -> Self {
        Self {
            status: "success".into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Community rating for one exact URL string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustScore {
    pub url: String,
    pub average_rating: Option<f64>,
    pub feedback_count: usize,
}

impl TrustScore {
    pub fn from_ratings<I>(url: impl Into<String>, ratings: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        let (sum, count) = ratings
            .into_iter()
            .fold((0i64, 0usize), |(sum, count), r| (sum + r as i64, count + 1));

        let average_rating = if count == 0 {
            None
        } else {
            Some(sum as f64 / count as f64)
        };

        Self {
            url: url.into(),
            average_rating,
            feedback_count: count,
        }
    }
}
