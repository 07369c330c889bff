use crate::{
    errors::AppError,
    external::TextGenerator,
    models::{ChatQuery, ChatReply},
};

pub fn scamgpt_prompt(query: &ChatQuery) -> String {
    format!(
        "You are ScamGPT, an AI expert in detecting scams and phishing. \
        Respond clearly to the user's query below with the given URL context.\n\n\
        Query: \"{}\"\nURL: {}",
        query.message,
        query.url.as_deref().unwrap_or("N/A")
    )
}

/// Single-turn: nothing from earlier questions is sent back to the model.
pub async fn ask_scamgpt(query: ChatQuery, ai: &dyn TextGenerator) -> Result<ChatReply, AppError> {
    let reply = ai.generate(&scamgpt_prompt(&query)).await?;

    if reply.trim().is_empty() {
        return Err(AppError::Ai("Empty ScamGPT reply".into()));
    }

    Ok(ChatReply { reply })
}
