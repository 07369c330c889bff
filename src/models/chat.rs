use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq)]
pub struct ChatQuery {
    pub message: String,
    pub url: Option<String>,
}

impl ChatQuery {
    pub fn parse(message: Option<String>, url: Option<String>) -> Result<Self, AppError> {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("Message is required".into()))?;

        Ok(Self {
            message,
            url: url.filter(|u| !u.is_empty()),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub reply: String,
}
